//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::shipment::ShipmentRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let tracking = repos.shipments().find_tracking("TC-CRG-2024-0001").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn shipments(&self) -> &dyn ShipmentRepository;
    fn bookings(&self) -> &dyn BookingRepository;
}
