// ===== prolom/src/optimizer/mod.rs =====
pub mod mutation;
pub mod runner;

use crate::alphabet::{Alphabet, Key};
use crate::error::{ProlomError, ProlomResult};
use crate::scorer::{plausibility_encoded, TransitionMatrix};

/// One Metropolis-Hastings chain over the key space.
///
/// Holds the current candidate, the best candidate seen, and the score
/// trajectory of a single execution. Created fresh per run, never shared.
pub struct Chain<'a> {
    alphabet: &'a Alphabet,
    matrix: &'a TransitionMatrix,
    cipher_indices: Vec<u8>,

    pub key: Key,
    pub score: f32,
    pub best_key: Key,
    pub best_score: f32,
    pub trajectory: Vec<f32>,

    rng: fastrand::Rng,
}

fn score_key(cipher: &[u8], alphabet: &Alphabet, matrix: &TransitionMatrix, key: &Key) -> f32 {
    let table = key.decrypt_table(alphabet);
    let decrypted: Vec<u8> = cipher.iter().map(|&c| table[c as usize]).collect();
    plausibility_encoded(&decrypted, matrix)
}

impl<'a> Chain<'a> {
    /// Validate inputs, adopt (or generate) the start key, score the initial
    /// decryption and seed the trajectory with it.
    pub fn new(
        alphabet: &'a Alphabet,
        matrix: &'a TransitionMatrix,
        ciphertext: &str,
        start_key: Option<Key>,
        seed: Option<u64>,
    ) -> ProlomResult<Self> {
        if matrix.dim() != alphabet.len() {
            return Err(ProlomError::Config(format!(
                "Transition matrix is {0}x{0} but the alphabet has {1} symbols",
                matrix.dim(),
                alphabet.len()
            )));
        }

        let cipher_indices = alphabet.encode(ciphertext)?;

        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let key = match start_key {
            Some(k) => {
                if !k.is_permutation_of(alphabet) {
                    return Err(ProlomError::Config(
                        "Start key is not a permutation of the alphabet".to_string(),
                    ));
                }
                k
            }
            None => Key::random(alphabet, &mut rng),
        };

        let score = score_key(&cipher_indices, alphabet, matrix, &key);

        Ok(Self {
            alphabet,
            matrix,
            cipher_indices,
            best_key: key.clone(),
            best_score: score,
            key,
            score,
            trajectory: vec![score],
            rng,
        })
    }

    /// Completed iterations so far.
    pub fn iterations(&self) -> usize {
        self.trajectory.len() - 1
    }

    /// One propose/score/accept round. Returns whether the candidate was
    /// accepted; the trajectory grows by one entry either way.
    pub fn step(&mut self) -> bool {
        let candidate = mutation::propose_swap(&self.key, &mut self.rng);
        let candidate_score = score_key(&self.cipher_indices, self.alphabet, self.matrix, &candidate);

        // Metropolis criterion on log scores; the uniform draw only happens
        // on the downhill branch.
        let accepted = candidate_score >= self.score
            || self.rng.f32() < (candidate_score - self.score).exp();

        if accepted {
            self.key = candidate;
            self.score = candidate_score;
        }
        self.trajectory.push(self.score);

        // Strict improvement only; ties keep the earlier best
        if self.score > self.best_score {
            self.best_score = self.score;
            self.best_key = self.key.clone();
        }

        accepted
    }

    /// Decryption of the ciphertext under the best key found.
    pub fn best_plaintext(&self) -> String {
        let table = self.best_key.decrypt_table(self.alphabet);
        self.cipher_indices
            .iter()
            .map(|&c| self.alphabet.symbol(table[c as usize] as usize) as char)
            .collect()
    }
}
