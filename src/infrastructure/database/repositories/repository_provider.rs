//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::shipment::ShipmentRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::shipment_repository::SeaOrmShipmentRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let tracking = repos.shipments().find_tracking("TC-CRG-2024-0001").await?;
/// let booking = repos.bookings().find_by_reference("TC-BKG-2024-7QX2M0KDA").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    shipments: SeaOrmShipmentRepository,
    bookings: SeaOrmBookingRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            shipments: SeaOrmShipmentRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn shipments(&self) -> &dyn ShipmentRepository {
        &self.shipments
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }
}
