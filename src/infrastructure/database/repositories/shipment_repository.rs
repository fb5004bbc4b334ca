//! SeaORM implementation of ShipmentRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::domain::shipment::{
    Shipment, ShipmentRepository, ShipmentStatus, ShipmentTracking, TrackingHistoryEntry,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{shipment, shipment_tracking_history};

pub struct SeaOrmShipmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmShipmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

impl From<shipment::ShipmentStatus> for ShipmentStatus {
    fn from(s: shipment::ShipmentStatus) -> Self {
        match s {
            shipment::ShipmentStatus::Received => Self::Received,
            shipment::ShipmentStatus::InTransit => Self::InTransit,
            shipment::ShipmentStatus::OutForDelivery => Self::OutForDelivery,
            shipment::ShipmentStatus::Delivered => Self::Delivered,
        }
    }
}

impl From<ShipmentStatus> for shipment::ShipmentStatus {
    fn from(s: ShipmentStatus) -> Self {
        match s {
            ShipmentStatus::Received => Self::Received,
            ShipmentStatus::InTransit => Self::InTransit,
            ShipmentStatus::OutForDelivery => Self::OutForDelivery,
            ShipmentStatus::Delivered => Self::Delivered,
        }
    }
}

fn shipment_to_domain(m: shipment::Model) -> Shipment {
    Shipment {
        id: m.id,
        tracking_number: m.tracking_number,
        current_status: m.current_status.into(),
        current_location: m.current_location,
        estimated_delivery: m.estimated_delivery,
    }
}

fn history_to_domain(m: shipment_tracking_history::Model) -> TrackingHistoryEntry {
    TrackingHistoryEntry {
        status: m.status.into(),
        location: m.location,
        description: m.description,
        recorded_at: m.recorded_at,
    }
}

// ── ShipmentRepository impl ─────────────────────────────────────

#[async_trait]
impl ShipmentRepository for SeaOrmShipmentRepository {
    async fn find_tracking(
        &self,
        tracking_number: &str,
    ) -> DomainResult<Option<ShipmentTracking>> {
        // One LEFT JOIN: a shipment without history yields a single row
        // whose history side is NULL.
        let rows = shipment::Entity::find()
            .filter(shipment::Column::TrackingNumber.eq(tracking_number))
            .find_also_related(shipment_tracking_history::Entity)
            .order_by_desc(shipment_tracking_history::Column::RecordedAt)
            .order_by_desc(shipment_tracking_history::Column::Id)
            .all(&self.db)
            .await?;

        let mut rows = rows.into_iter();
        let Some((first, first_entry)) = rows.next() else {
            return Ok(None);
        };

        let history: Vec<TrackingHistoryEntry> = first_entry
            .into_iter()
            .chain(rows.filter_map(|(_, entry)| entry))
            .map(history_to_domain)
            .collect();

        debug!(
            "Loaded shipment {} with {} history entries",
            first.tracking_number,
            history.len()
        );

        Ok(Some(ShipmentTracking::new(shipment_to_domain(first), history)))
    }
}
