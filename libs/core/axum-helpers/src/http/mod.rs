//! HTTP middleware: security headers and CORS.

pub mod cors;
pub mod security;

pub use cors::{cors_from_env, cors_layer};
pub use security::security_headers;
