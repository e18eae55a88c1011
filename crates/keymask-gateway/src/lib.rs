//! # Keymask Gateway - HTTP interface for the cipher engine
//!
//! Thin request-handling collaborator around `keymask-engine`. The engine
//! is invoked through exactly four named operations, selected by the
//! `action` field of a `POST /process` request:
//!
//! | action | engine operation |
//! |--------|------------------|
//! | `encrypt` | forward letter mapping |
//! | `full_decrypt` | inverse letter mapping + forward name pass |
//! | `simple_decrypt` | inverse letter mapping |
//! | `reverse_sub` | reverse name substitution |
//!
//! # Architecture
//!
//! ```text
//! POST /process ─→ Middleware (CORS → Trace → Timeout → BodyLimit)
//!                      │
//!                  validate: fields present, non-empty, action known
//!                      │
//!                  Action dispatch ─→ SubstitutionCipher (pure, shared)
//! ```
//!
//! Validation errors are reported to the client with descriptive messages
//! (HTTP 400) before the engine runs; the engine itself is total over
//! string input and does not fail per-request.

#![warn(clippy::all)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::actions::{is_action_supported, supported_actions, Action, ActionInfo};
pub use domain::config::GatewayConfig;
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::{ProcessRequest, ProcessResponse, ServiceInfo};
pub use router::AppState;
pub use service::{build_router, GatewayService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
