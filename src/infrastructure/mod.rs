//! Infrastructure layer - external concerns

pub mod database;

pub use database::{connect_and_migrate, init_database, redact_url, DatabaseConfig};
