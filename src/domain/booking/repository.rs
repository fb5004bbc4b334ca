//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking, returning it with the store-assigned id
    async fn insert(&self, booking: Booking) -> DomainResult<Booking>;

    /// Find booking by its external reference
    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Booking>>;
}
