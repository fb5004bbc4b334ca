//! Liveness / readiness

pub mod handlers;

pub use handlers::*;
