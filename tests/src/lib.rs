//! # Keymask Test Suite
//!
//! Unified test crate for cross-crate behavior.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── engine_properties.rs   # Cipher invariants (property-based)
//!     └── gateway_flows.rs       # HTTP flows against a live server
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p keymask-tests
//!
//! # By category
//! cargo test -p keymask-tests integration::engine_properties::
//! cargo test -p keymask-tests integration::gateway_flows::
//! ```

#![allow(dead_code)]

pub mod integration;
