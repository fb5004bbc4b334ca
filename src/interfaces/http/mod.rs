//! HTTP REST API interfaces
//!
//! - `common`: response bodies, `ApiError`, validated JSON extraction
//! - `modules`: handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, RouterDeps};
