//! Shipment domain entity and its tracking history

use chrono::{DateTime, Utc};

/// Shipment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentStatus {
    /// Accepted at a sorting facility
    Received,
    /// Moving between facilities
    InTransit,
    /// On the final delivery vehicle
    OutForDelivery,
    /// Handed over to the recipient
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::InTransit => "in-transit",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current snapshot of a trackable shipment.
///
/// Written by logistics processes outside this service; read-only here.
#[derive(Debug, Clone)]
pub struct Shipment {
    pub id: i32,
    /// External-facing, unique tracking number
    pub tracking_number: String,
    pub current_status: ShipmentStatus,
    pub current_location: String,
    pub estimated_delivery: DateTime<Utc>,
}

/// One immutable audit record of a shipment's status at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingHistoryEntry {
    pub status: ShipmentStatus,
    pub location: String,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

/// Shipment snapshot assembled with its full history, newest entry first
#[derive(Debug, Clone)]
pub struct ShipmentTracking {
    pub shipment: Shipment,
    pub history: Vec<TrackingHistoryEntry>,
}

impl ShipmentTracking {
    /// Build from a snapshot and history rows in any order.
    pub fn new(shipment: Shipment, mut history: Vec<TrackingHistoryEntry>) -> Self {
        // stable: equal timestamps keep their query order
        history.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Self { shipment, history }
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn shipment() -> Shipment {
        Shipment {
            id: 1,
            tracking_number: "TC-CRG-2024-0001".into(),
            current_status: ShipmentStatus::InTransit,
            current_location: "Nairobi - Mombasa Highway".into(),
            estimated_delivery: Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap(),
        }
    }

    fn entry(status: ShipmentStatus, at: DateTime<Utc>) -> TrackingHistoryEntry {
        TrackingHistoryEntry {
            status,
            location: "Nairobi Sorting Facility".into(),
            description: status.as_str().into(),
            recorded_at: at,
        }
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(ShipmentStatus::Received.as_str(), "received");
        assert_eq!(ShipmentStatus::InTransit.to_string(), "in-transit");
        assert_eq!(ShipmentStatus::OutForDelivery.as_str(), "out-for-delivery");
        assert_eq!(ShipmentStatus::Delivered.as_str(), "delivered");
    }

    #[test]
    fn history_is_sorted_newest_first() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let tracking = ShipmentTracking::new(
            shipment(),
            vec![
                entry(ShipmentStatus::Received, t0),
                entry(ShipmentStatus::OutForDelivery, t0 + Duration::hours(20)),
                entry(ShipmentStatus::InTransit, t0 + Duration::hours(2)),
            ],
        );

        let statuses: Vec<_> = tracking.history.iter().map(|h| h.status).collect();
        assert_eq!(
            statuses,
            vec![
                ShipmentStatus::OutForDelivery,
                ShipmentStatus::InTransit,
                ShipmentStatus::Received
            ]
        );
    }

    #[test]
    fn empty_history() {
        let tracking = ShipmentTracking::new(shipment(), Vec::new());
        assert!(!tracking.has_history());
    }
}
