use crate::alphabet::{Alphabet, Key};
use crate::consts::{DEFAULT_ITERATIONS, LOG_STRIDE};
use crate::error::ProlomResult;
use crate::optimizer::Chain;
use crate::scorer::TransitionMatrix;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Knobs for one search run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub iterations: usize,
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

/// Everything one execution produces: the best key, its decryption, its
/// score, and the per-iteration score trajectory (initial state included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub key: String,
    pub plaintext: String,
    pub score: f32,
    pub trajectory: Vec<f32>,
}

/// Observes the running search every `LOG_STRIDE` iterations.
/// Returning false aborts the loop; the best-so-far result is still
/// returned, and best-score monotonicity holds for the shortened run.
pub trait ProgressCallback {
    fn on_progress(&mut self, iteration: usize, score: f32, best_score: f32) -> bool;
}

impl ProgressCallback for () {
    fn on_progress(&mut self, _iteration: usize, _score: f32, _best_score: f32) -> bool {
        true
    }
}

/// Drives a single chain for a configured number of iterations.
pub struct Engine<'a> {
    alphabet: &'a Alphabet,
    matrix: &'a TransitionMatrix,
    options: SearchOptions,
}

impl<'a> Engine<'a> {
    pub fn new(
        alphabet: &'a Alphabet,
        matrix: &'a TransitionMatrix,
        options: SearchOptions,
    ) -> Self {
        Self {
            alphabet,
            matrix,
            options,
        }
    }

    pub fn run(&self, ciphertext: &str, start_key: Option<Key>) -> ProlomResult<SearchResult> {
        self.run_with(ciphertext, start_key, &mut ())
    }

    pub fn run_with<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        start_key: Option<Key>,
        callback: &mut CB,
    ) -> ProlomResult<SearchResult> {
        let mut chain = Chain::new(
            self.alphabet,
            self.matrix,
            ciphertext,
            start_key,
            self.options.seed,
        )?;

        debug!(
            iterations = self.options.iterations,
            start_score = chain.score,
            "Starting search"
        );

        for i in 0..self.options.iterations {
            chain.step();

            if (i + 1) % LOG_STRIDE == 0 {
                debug!(
                    iteration = i + 1,
                    score = chain.score,
                    best = chain.best_score,
                    "progress"
                );
                if !callback.on_progress(i + 1, chain.score, chain.best_score) {
                    debug!(iteration = i + 1, "Search aborted by callback");
                    break;
                }
            }
        }

        debug!(
            iterations = chain.iterations(),
            best = chain.best_score,
            "Search terminated"
        );

        Ok(SearchResult {
            key: chain.best_key.to_string(),
            plaintext: chain.best_plaintext(),
            score: chain.best_score,
            trajectory: chain.trajectory,
        })
    }
}
