use crate::alphabet::Alphabet;
use crate::consts::WORD_SEPARATOR;
use crate::error::ProlomResult;
use crate::scorer::TransitionMatrix;
use tracing::debug;

/// Normalize raw corpus text onto the alphabet: uppercase, whitespace runs
/// collapse to the separator symbol, anything else is dropped.
pub fn normalize(text: &str, alphabet: &Alphabet) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_separator = true;
            continue;
        }
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii() || !alphabet.contains(upper as u8) {
            continue;
        }
        if pending_separator && !out.is_empty() && alphabet.contains(WORD_SEPARATOR) {
            out.push(WORD_SEPARATOR as char);
        }
        pending_separator = false;
        out.push(upper);
    }

    out
}

/// Build a reference matrix from corpus text: count bigram occurrences over
/// the normalized text, lift zero counts to 1, take natural logs.
pub fn from_reference_text(text: &str, alphabet: &Alphabet) -> ProlomResult<TransitionMatrix> {
    let n = alphabet.len();
    let normalized = normalize(text, alphabet);
    let encoded = alphabet.encode(&normalized)?;

    let mut counts = vec![0u32; n * n];
    for pair in encoded.windows(2) {
        counts[pair[0] as usize * n + pair[1] as usize] += 1;
    }

    let weights: Vec<f32> = counts.iter().map(|&c| (c.max(1) as f32).ln()).collect();
    debug!(
        symbols = encoded.len(),
        dim = n,
        "Built reference matrix from corpus text"
    );
    TransitionMatrix::from_log_weights(n, weights)
}
