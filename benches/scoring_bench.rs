// ===== prolom/benches/scoring_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use prolom::alphabet::Alphabet;
use prolom::optimizer::Chain;
use prolom::scorer::{self, corpus};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let text = "THE_QUICK_BROWN_FOX_JUMPS_OVER_THE_LAZY_DOG_AND_THE_SLOW_HOUND_WAITS_BY_THE_GATE_"
        .repeat(200);
    let matrix = corpus::from_reference_text(&text, &alphabet).unwrap();

    c.bench_function("plausibility (16k symbols)", |b| {
        b.iter(|| scorer::plausibility(black_box(&text), &alphabet, &matrix))
    });

    let ciphertext: String = text.chars().take(1000).collect();
    let mut chain = Chain::new(&alphabet, &matrix, &ciphertext, None, Some(1)).unwrap();

    c.bench_function("chain step (1k symbol ciphertext)", |b| {
        b.iter(|| chain.step())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
