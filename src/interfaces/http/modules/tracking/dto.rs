//! Tracking DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ShipmentTracking, TrackingHistoryEntry};

pub const TRACKING_ID_REQUIRED: &str = "Tracking ID is required.";
pub const TRACKING_NOT_FOUND: &str = "Tracking ID not found.";
pub const TRACKING_UNAVAILABLE: &str = "Unable to retrieve tracking information.";

/// Query parameters for the tracking lookup
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrackingQuery {
    /// Shipment tracking number, e.g. `TC-CRG-2024-0001`
    pub id: Option<String>,
}

/// One history entry, newest first in [`TrackingResponse::history`]
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackingHistoryDto {
    pub status: String,
    pub location: String,
    pub description: String,
    /// RFC 3339 timestamp at which the entry was recorded
    pub timestamp: String,
}

/// Shipment snapshot plus ordered history
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackingResponse {
    pub tracking_number: String,
    /// received | in-transit | out-for-delivery | delivered
    pub current_status: String,
    pub current_location: String,
    /// RFC 3339 estimated delivery time
    pub estimated_delivery: String,
    pub history: Vec<TrackingHistoryDto>,
}

impl From<TrackingHistoryEntry> for TrackingHistoryDto {
    fn from(e: TrackingHistoryEntry) -> Self {
        Self {
            status: e.status.as_str().to_string(),
            location: e.location,
            description: e.description,
            timestamp: e.recorded_at.to_rfc3339(),
        }
    }
}

impl From<ShipmentTracking> for TrackingResponse {
    fn from(t: ShipmentTracking) -> Self {
        Self {
            tracking_number: t.shipment.tracking_number,
            current_status: t.shipment.current_status.as_str().to_string(),
            current_location: t.shipment.current_location,
            estimated_delivery: t.shipment.estimated_delivery.to_rfc3339(),
            history: t.history.into_iter().map(Into::into).collect(),
        }
    }
}
