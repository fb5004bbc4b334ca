//! Shipment repository interface

use async_trait::async_trait;

use super::model::ShipmentTracking;
use crate::domain::DomainResult;

#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Load a shipment with its history by tracking number.
    ///
    /// Returns `None` when no shipment carries the number. A shipment with
    /// no recorded history comes back with an empty `history`.
    async fn find_tracking(&self, tracking_number: &str)
        -> DomainResult<Option<ShipmentTracking>>;
}
