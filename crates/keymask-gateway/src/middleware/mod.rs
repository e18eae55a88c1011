//! Middleware stack for the gateway.
//!
//! Layer order: Request → CORS → Trace → Timeout → BodyLimit → Handler.
//! Everything here wraps tower-http layers; rate limiting and auth have no
//! counterpart in this service.

pub mod cors;

pub use cors::create_cors_layer;
