//! # Substitution Key
//!
//! A bijective mapping over the 26 ASCII letters, generated from a seeded
//! pseudo-random shuffle. The inverse table is derived eagerly at
//! construction, so both directions always describe the same permutation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EngineError;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Shuffle attempts before falling back to a deterministic permutation.
///
/// A Fisher-Yates shuffle of distinct elements always yields a bijection,
/// but a broken shuffle is a latent correctness bug, so the table is
/// validated anyway and generation retries before reconstructing.
const MAX_SHUFFLE_ATTEMPTS: usize = 3;

/// Sentinel marking an unassigned slot while the inverse table is built.
const UNASSIGNED: u8 = u8::MAX;

/// Bijective letter mapping with its derived inverse.
///
/// `forward[i]` is the ciphertext letter index for plaintext letter `i`;
/// `inverse[forward[i]] == i` holds for every `i`. Both tables are fixed at
/// construction and never mutated, so a shared key can serve concurrent
/// transform calls without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionKey {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl SubstitutionKey {
    /// Generate a key from a seed.
    ///
    /// The same seed always produces the same key. If the shuffled table
    /// repeatedly fails the bijection check, a seed-derived rotation is
    /// used instead; a rotation is a valid permutation by construction.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::KeyGeneration` if no valid bijection could be
    /// produced. This path is defensive and not reachable with a correct
    /// shuffle implementation.
    pub fn generate(seed: u64) -> Result<Self, EngineError> {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut table = identity_table();
        for _ in 0..MAX_SHUFFLE_ATTEMPTS {
            table.shuffle(&mut rng);
            if let Ok(key) = Self::from_permutation(&table) {
                return Ok(key);
            }
        }

        // Rotation fallback: shift every letter by a fixed non-zero offset.
        let shift = (seed % (ALPHABET_LEN as u64 - 1) + 1) as u8;
        let mut rotated = [0u8; ALPHABET_LEN];
        for (i, slot) in rotated.iter_mut().enumerate() {
            *slot = (i as u8 + shift) % ALPHABET_LEN as u8;
        }
        Self::from_permutation(&rotated)
            .map_err(|e| EngineError::KeyGeneration(e.to_string()))
    }

    /// Build a key from an explicit permutation table.
    ///
    /// `table[i]` is the ciphertext letter index for plaintext letter `i`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPermutation` if any entry is out of
    /// range or if two plaintext letters map to the same ciphertext letter.
    pub fn from_permutation(table: &[u8; ALPHABET_LEN]) -> Result<Self, EngineError> {
        let mut inverse = [UNASSIGNED; ALPHABET_LEN];
        for (plain, &cipher) in table.iter().enumerate() {
            if cipher as usize >= ALPHABET_LEN {
                return Err(EngineError::InvalidPermutation(format!(
                    "entry {} maps outside the alphabet ({})",
                    plain, cipher
                )));
            }
            if inverse[cipher as usize] != UNASSIGNED {
                return Err(EngineError::InvalidPermutation(format!(
                    "letters {} and {} both map to {}",
                    letter(inverse[cipher as usize]),
                    letter(plain as u8),
                    letter(cipher)
                )));
            }
            inverse[cipher as usize] = plain as u8;
        }

        Ok(Self {
            forward: *table,
            inverse,
        })
    }

    /// Map a character through the forward (encrypting) table.
    ///
    /// Case is preserved; anything outside `a-z`/`A-Z` passes through
    /// unchanged.
    pub fn encode(&self, c: char) -> char {
        map_char(&self.forward, c)
    }

    /// Map a character through the inverse (decrypting) table.
    pub fn decode(&self, c: char) -> char {
        map_char(&self.inverse, c)
    }

    /// Render the forward mapping as `a->q b->w ...` for startup logging.
    pub fn mapping(&self) -> String {
        self.forward
            .iter()
            .enumerate()
            .map(|(plain, &cipher)| format!("{}->{}", letter(plain as u8), letter(cipher)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The identity permutation.
fn identity_table() -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

/// Lowercase letter for an alphabet index.
fn letter(index: u8) -> char {
    (b'a' + index) as char
}

fn map_char(table: &[u8; ALPHABET_LEN], c: char) -> char {
    if c.is_ascii_lowercase() {
        (b'a' + table[(c as u8 - b'a') as usize]) as char
    } else if c.is_ascii_uppercase() {
        (b'A' + table[(c as u8 - b'A') as usize]) as char
    } else {
        c
    }
}
