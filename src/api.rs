// ===== prolom/src/api.rs =====
use crate::alphabet::{Alphabet, Key};
use crate::consts::DEFAULT_ITERATIONS;
use crate::error::{ProlomError, ProlomResult};
use crate::optimizer::runner::{Engine, SearchOptions, SearchResult};
use crate::reports::ReportSink;
use crate::scorer::TransitionMatrix;

/// Fluent single-shot configuration for a cipher-breaking run.
///
/// Setters overwrite earlier values (last write wins). `execute` builds and
/// runs exactly one engine per call, so repeated calls on the same
/// configuration are independent searches, not resumptions.
#[derive(Debug, Clone)]
pub struct CipherBreaker {
    alphabet: Alphabet,
    ciphertext: Option<String>,
    matrix: Option<TransitionMatrix>,
    iterations: usize,
    start_key: Option<String>,
    seed: Option<u64>,
}

impl Default for CipherBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherBreaker {
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::default(),
            ciphertext: None,
            matrix: None,
            iterations: DEFAULT_ITERATIONS,
            start_key: None,
            seed: None,
        }
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn ciphertext(mut self, text: &str) -> Self {
        self.ciphertext = Some(text.to_string());
        self
    }

    pub fn transition_matrix(mut self, matrix: TransitionMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Start key as a permutation string. When never set, each execution
    /// starts from a random key.
    pub fn start_key(mut self, key: &str) -> Self {
        self.start_key = Some(key.to_string());
        self
    }

    /// Fixed RNG seed for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run one full search with the accumulated configuration. All
    /// validation happens before the first iteration; a partially configured
    /// run never starts.
    pub fn execute(&self) -> ProlomResult<SearchResult> {
        let ciphertext = self.ciphertext.as_deref().ok_or_else(|| {
            ProlomError::Config("Ciphertext must be set before execution".to_string())
        })?;
        if ciphertext.is_empty() {
            return Err(ProlomError::Config("Ciphertext is empty".to_string()));
        }
        let matrix = self.matrix.as_ref().ok_or_else(|| {
            ProlomError::Config("Transition matrix must be set before execution".to_string())
        })?;

        let start_key = match &self.start_key {
            Some(text) => Some(Key::parse(text, &self.alphabet)?),
            None => None,
        };

        let options = SearchOptions {
            iterations: self.iterations,
            seed: self.seed,
        };

        Engine::new(&self.alphabet, matrix, options).run(ciphertext, start_key)
    }

    /// Run one search, then hand the finished result to a reporting sink.
    /// Reporting happens strictly after the loop terminates and never feeds
    /// back into engine state or results.
    pub fn execute_with_reporter<S: ReportSink>(&self, sink: &mut S) -> ProlomResult<SearchResult> {
        let result = self.execute()?;
        sink.persist_plaintext(&result)?;
        sink.display_trajectory(&result.trajectory)?;
        Ok(result)
    }
}
