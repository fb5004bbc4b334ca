//! # TransportCo Service
//!
//! Backend for the TransportCo website: shipment tracking lookup and
//! transport booking requests over a relational database.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Shipments, tracking history, bookings and repository traits
//! - **application**: Tracking and booking use cases
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Process lifecycle (startup, graceful shutdown, tracing)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{connect_and_migrate, init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, RouterDeps};
