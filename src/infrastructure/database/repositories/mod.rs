//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod repository_provider;
pub mod shipment_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    use super::*;
    use crate::domain::booking::{Booking, NewBooking};
    use crate::domain::{RepositoryProvider, ShipmentStatus};
    use crate::infrastructure::database::entities::{booking, shipment, shipment_tracking_history};
    use crate::infrastructure::database::{connect_and_migrate, DatabaseConfig};

    async fn db() -> DatabaseConnection {
        connect_and_migrate(&DatabaseConfig::in_memory()).await.unwrap()
    }

    async fn insert_shipment(db: &DatabaseConnection, tracking_number: &str) -> i32 {
        shipment::ActiveModel {
            tracking_number: Set(tracking_number.to_string()),
            current_status: Set(shipment::ShipmentStatus::InTransit),
            current_location: Set("Nairobi - Mombasa Highway".into()),
            estimated_delivery: Set(Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    async fn insert_history(
        db: &DatabaseConnection,
        shipment_id: i32,
        status: shipment::ShipmentStatus,
        minutes: i64,
    ) {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        shipment_tracking_history::ActiveModel {
            shipment_id: Set(shipment_id),
            status: Set(status),
            location: Set("Nairobi Sorting Facility".into()),
            description: Set(format!("{:?}", status)),
            recorded_at: Set(base + Duration::minutes(minutes)),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn find_tracking_orders_history_newest_first() {
        let db = db().await;
        let id = insert_shipment(&db, "TC-CRG-2024-0001").await;
        insert_history(&db, id, shipment::ShipmentStatus::Received, 0).await;
        insert_history(&db, id, shipment::ShipmentStatus::OutForDelivery, 600).await;
        insert_history(&db, id, shipment::ShipmentStatus::InTransit, 90).await;

        let repos = SeaOrmRepositoryProvider::new(db);
        let tracking = repos
            .shipments()
            .find_tracking("TC-CRG-2024-0001")
            .await
            .unwrap()
            .expect("shipment exists");

        assert_eq!(tracking.shipment.tracking_number, "TC-CRG-2024-0001");
        assert_eq!(tracking.shipment.current_status, ShipmentStatus::InTransit);
        let statuses: Vec<_> = tracking.history.iter().map(|h| h.status).collect();
        assert_eq!(
            statuses,
            vec![
                ShipmentStatus::OutForDelivery,
                ShipmentStatus::InTransit,
                ShipmentStatus::Received
            ]
        );
        assert!(tracking
            .history
            .windows(2)
            .all(|w| w[0].recorded_at > w[1].recorded_at));
    }

    #[tokio::test]
    async fn find_tracking_ignores_other_shipments() {
        let db = db().await;
        let a = insert_shipment(&db, "TC-CRG-2024-0001").await;
        let b = insert_shipment(&db, "TC-CRG-2024-0002").await;
        insert_history(&db, a, shipment::ShipmentStatus::Received, 0).await;
        insert_history(&db, b, shipment::ShipmentStatus::Received, 0).await;
        insert_history(&db, b, shipment::ShipmentStatus::Delivered, 5).await;

        let repos = SeaOrmRepositoryProvider::new(db);
        let tracking = repos
            .shipments()
            .find_tracking("TC-CRG-2024-0001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(tracking.history.len(), 1);
    }

    #[tokio::test]
    async fn find_tracking_unknown_number() {
        let repos = SeaOrmRepositoryProvider::new(db().await);
        let tracking = repos.shipments().find_tracking("NOPE").await.unwrap();
        assert!(tracking.is_none());
    }

    #[tokio::test]
    async fn find_tracking_shipment_without_history() {
        let db = db().await;
        insert_shipment(&db, "TC-CRG-2024-0003").await;

        let repos = SeaOrmRepositoryProvider::new(db);
        let tracking = repos
            .shipments()
            .find_tracking("TC-CRG-2024-0003")
            .await
            .unwrap()
            .expect("snapshot is still returned");
        assert!(!tracking.has_history());
    }

    fn new_booking() -> NewBooking {
        NewBooking {
            customer_id: 7,
            service_type: "sedan".into(),
            pickup_location: "CBD".into(),
            dropoff_location: "Airport".into(),
            pickup_datetime: "2024-05-01T08:00:00".into(),
            number_of_passengers: Some(2),
            special_requirements: Some("Child seat".into()),
        }
    }

    #[tokio::test]
    async fn booking_insert_and_find() {
        let repos = SeaOrmRepositoryProvider::new(db().await);
        let inserted = repos
            .bookings()
            .insert(Booking::from_request(
                new_booking(),
                "TC-BKG-2024-AAAAAAAAA".into(),
                Utc::now(),
            ))
            .await
            .unwrap();
        assert!(inserted.id > 0);

        let found = repos
            .bookings()
            .find_by_reference("TC-BKG-2024-AAAAAAAAA")
            .await
            .unwrap()
            .expect("booking stored");
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.number_of_passengers, Some(2));
        assert_eq!(found.special_requirements.as_deref(), Some("Child seat"));

        assert!(repos
            .bookings()
            .find_by_reference("TC-BKG-2024-ZZZZZZZZZ")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_reference_is_a_storage_error() {
        let db = db().await;
        let repos = SeaOrmRepositoryProvider::new(db.clone());
        let make = || Booking::from_request(new_booking(), "TC-BKG-2024-DUPDUPDUP".into(), Utc::now());

        repos.bookings().insert(make()).await.unwrap();
        let err = repos.bookings().insert(make()).await.unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Storage(_)));

        use sea_orm::{EntityTrait, PaginatorTrait};
        assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unrecognised_stored_status_is_a_storage_error() {
        let db = db().await;
        booking::ActiveModel {
            booking_reference: Set("TC-BKG-2024-BACKOFFIC".into()),
            customer_id: Set(7),
            service_type: Set("sedan".into()),
            pickup_location: Set("CBD".into()),
            dropoff_location: Set("Airport".into()),
            pickup_datetime: Set("2024-05-01T08:00:00".into()),
            status: Set("confirmed".into()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let repos = SeaOrmRepositoryProvider::new(db);
        let err = repos
            .bookings()
            .find_by_reference("TC-BKG-2024-BACKOFFIC")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Storage(ref m) if m.contains("confirmed")));
    }
}
