// ===== prolom/src/alphabet.rs =====
use crate::consts::{DEFAULT_ALPHABET, SYMBOL_NOT_FOUND, SYMBOL_RANGE};
use crate::error::{ProlomError, ProlomResult};
use std::fmt;

/// The fixed, ordered symbol set a cipher operates over.
///
/// Immutable for the lifetime of a run. Lookups go through a byte-indexed
/// position map with 255 as the "not a member" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index_map: [u8; SYMBOL_RANGE],
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET).expect("default alphabet is valid")
    }
}

impl Alphabet {
    /// Build an alphabet from an ordered string of distinct ASCII symbols.
    pub fn new(symbols: &str) -> ProlomResult<Self> {
        if !symbols.is_ascii() {
            return Err(ProlomError::Config(
                "Alphabet symbols must be ASCII".to_string(),
            ));
        }
        let bytes = symbols.as_bytes().to_vec();
        if bytes.len() < 2 {
            return Err(ProlomError::Config(
                "Alphabet needs at least two symbols".to_string(),
            ));
        }
        if bytes.len() >= SYMBOL_NOT_FOUND as usize {
            return Err(ProlomError::Config(format!(
                "Alphabet is limited to {} symbols, got {}",
                SYMBOL_NOT_FOUND as usize - 1,
                bytes.len()
            )));
        }

        let mut index_map = [SYMBOL_NOT_FOUND; SYMBOL_RANGE];
        for (i, &b) in bytes.iter().enumerate() {
            if index_map[b as usize] != SYMBOL_NOT_FOUND {
                return Err(ProlomError::Config(format!(
                    "Duplicate symbol '{}' in alphabet",
                    b as char
                )));
            }
            index_map[b as usize] = i as u8;
        }

        Ok(Self {
            symbols: bytes,
            index_map,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at an alphabet position. Panics on out-of-range positions.
    pub fn symbol(&self, index: usize) -> u8 {
        self.symbols[index]
    }

    pub fn position(&self, symbol: u8) -> Option<usize> {
        match self.index_map[symbol as usize] {
            SYMBOL_NOT_FOUND => None,
            i => Some(i as usize),
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.index_map[symbol as usize] != SYMBOL_NOT_FOUND
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.symbols).expect("alphabet symbols are ASCII")
    }

    /// Encode text as alphabet positions, rejecting foreign symbols.
    pub fn encode(&self, text: &str) -> ProlomResult<Vec<u8>> {
        text.bytes()
            .map(|b| {
                self.position(b)
                    .map(|i| i as u8)
                    .ok_or(ProlomError::Symbol(b as char))
            })
            .collect()
    }

    /// Forward substitution: each plaintext symbol becomes the key symbol at
    /// its alphabet position.
    pub fn encrypt(&self, plaintext: &str, key: &Key) -> ProlomResult<String> {
        let mut out = String::with_capacity(plaintext.len());
        for b in plaintext.bytes() {
            let i = self.position(b).ok_or(ProlomError::Symbol(b as char))?;
            out.push(key.symbols[i] as char);
        }
        Ok(out)
    }

    /// Reverse substitution: each ciphertext symbol becomes the alphabet
    /// symbol at its key position. Symbols outside the alphabet are an error,
    /// never passed through.
    pub fn decrypt(&self, ciphertext: &str, key: &Key) -> ProlomResult<String> {
        let positions = key.position_map();
        let mut out = String::with_capacity(ciphertext.len());
        for b in ciphertext.bytes() {
            let p = positions[b as usize];
            if p == SYMBOL_NOT_FOUND {
                return Err(ProlomError::Symbol(b as char));
            }
            out.push(self.symbols[p as usize] as char);
        }
        Ok(out)
    }
}

/// A substitution key: a permutation of the alphabet.
///
/// `symbols[i]` is the cipher symbol standing for the plaintext symbol at
/// alphabet position `i`. Keys are immutable values; transformations return
/// new keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    symbols: Vec<u8>,
}

impl Key {
    /// Parse and validate a key string against an alphabet: correct length,
    /// every symbol a member, no repeats.
    pub fn parse(text: &str, alphabet: &Alphabet) -> ProlomResult<Self> {
        if text.len() != alphabet.len() {
            return Err(ProlomError::Config(format!(
                "Key length {} does not match alphabet size {}",
                text.len(),
                alphabet.len()
            )));
        }

        let mut seen = [false; SYMBOL_RANGE];
        let mut symbols = Vec::with_capacity(alphabet.len());
        for b in text.bytes() {
            if !alphabet.contains(b) {
                return Err(ProlomError::Symbol(b as char));
            }
            if seen[b as usize] {
                return Err(ProlomError::Config(format!(
                    "Key repeats symbol '{}'",
                    b as char
                )));
            }
            seen[b as usize] = true;
            symbols.push(b);
        }

        Ok(Self { symbols })
    }

    /// The key mapping every symbol to itself.
    pub fn identity(alphabet: &Alphabet) -> Self {
        Self {
            symbols: alphabet.symbols.clone(),
        }
    }

    /// A uniformly random permutation key.
    pub fn random(alphabet: &Alphabet, rng: &mut fastrand::Rng) -> Self {
        let mut symbols = alphabet.symbols.clone();
        rng.shuffle(&mut symbols);
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// New key with the symbols at two positions exchanged.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut symbols = self.symbols.clone();
        symbols.swap(a, b);
        Self { symbols }
    }

    /// The key that undoes this one: decrypting with the inverse is the same
    /// as encrypting with the original.
    pub fn invert(&self, alphabet: &Alphabet) -> Self {
        let mut symbols = vec![0u8; self.symbols.len()];
        for (i, &s) in self.symbols.iter().enumerate() {
            let m = alphabet
                .position(s)
                .expect("key symbols are drawn from the alphabet");
            symbols[m] = alphabet.symbol(i);
        }
        Self { symbols }
    }

    pub fn is_permutation_of(&self, alphabet: &Alphabet) -> bool {
        if self.symbols.len() != alphabet.len() {
            return false;
        }
        let mut seen = [false; SYMBOL_RANGE];
        for &b in &self.symbols {
            if !alphabet.contains(b) || seen[b as usize] {
                return false;
            }
            seen[b as usize] = true;
        }
        true
    }

    /// Byte-indexed map from cipher symbol to key position.
    pub fn position_map(&self) -> [u8; SYMBOL_RANGE] {
        let mut map = [SYMBOL_NOT_FOUND; SYMBOL_RANGE];
        for (i, &b) in self.symbols.iter().enumerate() {
            map[b as usize] = i as u8;
        }
        map
    }

    /// Map from ciphertext alphabet position to plaintext alphabet position.
    /// Lets the engine decrypt in index space without touching strings.
    pub fn decrypt_table(&self, alphabet: &Alphabet) -> Vec<u8> {
        let mut table = vec![0u8; self.symbols.len()];
        for (i, &s) in self.symbols.iter().enumerate() {
            let m = alphabet
                .position(s)
                .expect("key symbols are drawn from the alphabet");
            table[m] = i as u8;
        }
        table
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::str::from_utf8(&self.symbols).map_err(|_| fmt::Error)?)
    }
}
