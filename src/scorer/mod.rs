// ===== prolom/src/scorer/mod.rs =====
pub mod corpus;
pub mod loader;

use crate::alphabet::Alphabet;
use crate::consts::SMOOTHING_FLOOR;
use crate::error::{ProlomError, ProlomResult};

/// Reference bigram log-weights over an alphabet of size `n`.
///
/// Supplied fully formed and consumed read-only; row-major `n * n` storage.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    weights: Vec<f32>,
}

impl TransitionMatrix {
    /// Build from row-major log-weights. Non-finite entries are replaced
    /// with the smoothing floor.
    pub fn from_log_weights(n: usize, mut weights: Vec<f32>) -> ProlomResult<Self> {
        if weights.len() != n * n {
            return Err(ProlomError::Config(format!(
                "Transition matrix needs {} entries for {} symbols, got {}",
                n * n,
                n,
                weights.len()
            )));
        }
        for w in &mut weights {
            if !w.is_finite() {
                *w = SMOOTHING_FLOOR;
            }
        }
        Ok(Self { n, weights })
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn weight(&self, from: usize, to: usize) -> f32 {
        self.weights[from * self.n + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.weights.chunks(self.n)
    }
}

/// Log-plausibility of `text` under the reference matrix: the sum of the
/// bigram weights over every consecutive symbol pair. Pure and stateless;
/// text shorter than one pair scores 0.0.
pub fn plausibility(
    text: &str,
    alphabet: &Alphabet,
    matrix: &TransitionMatrix,
) -> ProlomResult<f32> {
    if matrix.dim() != alphabet.len() {
        return Err(ProlomError::Config(format!(
            "Transition matrix is {0}x{0} but the alphabet has {1} symbols",
            matrix.dim(),
            alphabet.len()
        )));
    }
    let encoded = alphabet.encode(text)?;
    Ok(plausibility_encoded(&encoded, matrix))
}

/// Hot-path variant over pre-encoded alphabet positions.
#[inline]
pub fn plausibility_encoded(encoded: &[u8], matrix: &TransitionMatrix) -> f32 {
    let mut total = 0.0f32;
    for pair in encoded.windows(2) {
        total += matrix.weight(pair[0] as usize, pair[1] as usize);
    }
    total
}
