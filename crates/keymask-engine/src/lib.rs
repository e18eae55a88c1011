//! # Keymask Engine - Substitution Cipher Core
//!
//! Deterministic, key-driven text transforms over the 26-letter alphabet.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `key` | Bijective letter permutation, seeded generation, inverse |
//! | `names` | Token-level name dictionary, bidirectional substitution |
//! | `cipher` | Engine facade exposing the four text operations |
//!
//! ## Properties
//!
//! - **Bijection**: the key is a validated permutation; every plaintext
//!   letter has exactly one image and every ciphertext letter one preimage.
//! - **Round trip**: `decrypt(encrypt(s)) == s` under one key instance.
//! - **Totality**: every operation accepts any string; non-letters
//!   (digits, punctuation, whitespace, non-ASCII) pass through unchanged.
//! - **Immutability**: key and dictionary are fixed at construction, so
//!   concurrent transform calls need no synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cipher;
pub mod error;
pub mod key;
pub mod names;

// Re-exports
pub use cipher::SubstitutionCipher;
pub use error::EngineError;
pub use key::{SubstitutionKey, ALPHABET_LEN};
pub use names::{NameDictionary, NameDirection};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
