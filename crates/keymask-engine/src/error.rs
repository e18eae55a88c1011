//! Engine error types.

use thiserror::Error;

/// Cipher engine errors.
///
/// All variants are construction-time failures. Transform operations are
/// total over string input and do not return errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Key generation could not produce a valid bijection
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Supplied permutation table is not a bijection over the alphabet
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Name dictionary contains invalid or conflicting entries
    #[error("Invalid name dictionary: {0}")]
    Dictionary(String),

    /// Name dictionary file could not be read or parsed
    #[error("Name dictionary unreadable: {0}")]
    DictionaryUnreadable(String),
}
