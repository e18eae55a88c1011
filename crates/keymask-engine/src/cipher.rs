//! # Substitution Cipher
//!
//! The engine facade. Owns one immutable [`SubstitutionKey`] and one
//! immutable [`NameDictionary`] and exposes the four text operations. Every
//! operation is a pure, synchronous function of the key state and its
//! input, so a shared instance serves concurrent callers without locking.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::EngineError;
use crate::key::SubstitutionKey;
use crate::names::{NameDictionary, NameDirection};

/// Key-driven text transform engine.
#[derive(Debug, Clone)]
pub struct SubstitutionCipher {
    key: SubstitutionKey,
    names: NameDictionary,
}

impl SubstitutionCipher {
    /// Create an engine with a fresh time-derived seed, so distinct process
    /// runs get distinct keys.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::KeyGeneration` if key generation fails; the
    /// process should not serve requests in that case.
    pub fn new(names: NameDictionary) -> Result<Self, EngineError> {
        Self::with_seed(seed_from_time(), names)
    }

    /// Create an engine with an explicit seed. The same seed always yields
    /// the same key, which is what tests and debugging sessions want.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::KeyGeneration` if key generation fails.
    pub fn with_seed(seed: u64, names: NameDictionary) -> Result<Self, EngineError> {
        Ok(Self {
            key: SubstitutionKey::generate(seed)?,
            names,
        })
    }

    /// Create an engine from an already-built key and dictionary. This is
    /// the dependency-injection seam: callers that need full control over
    /// the permutation (tests, fixed deployments) construct the key
    /// themselves.
    pub fn from_parts(key: SubstitutionKey, names: NameDictionary) -> Self {
        Self { key, names }
    }

    /// The letter-mapping key.
    pub fn key(&self) -> &SubstitutionKey {
        &self.key
    }

    /// The name dictionary.
    pub fn names(&self) -> &NameDictionary {
        &self.names
    }

    /// Apply the forward letter mapping. Case is preserved; non-letters
    /// pass through unchanged.
    pub fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.key.encode(c)).collect()
    }

    /// Apply the inverse letter mapping. `decrypt(encrypt(s)) == s` for any
    /// `s` under the same key instance.
    pub fn decrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.key.decode(c)).collect()
    }

    /// Decrypt, then rewrite recognized alias tokens in the decrypted text
    /// to their canonical names. Identical to [`decrypt`](Self::decrypt)
    /// when no token matches.
    pub fn full_decrypt(&self, text: &str) -> String {
        let plain = self.decrypt(text);
        self.names.substitute(&plain, NameDirection::Forward)
    }

    /// Whole-token name substitution in the given direction. Does not touch
    /// letter substitution.
    pub fn substitute_names(&self, text: &str, direction: NameDirection) -> String {
        self.names.substitute(text, direction)
    }
}

/// Seconds since the Unix epoch, used as the default key seed.
fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
