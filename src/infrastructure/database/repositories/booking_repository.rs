//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::domain::booking::{Booking, BookingRepository, BookingStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let status: BookingStatus = m
        .status
        .parse()
        .map_err(|e| DomainError::Storage(format!("booking {}: {}", m.booking_reference, e)))?;

    Ok(Booking {
        id: m.id,
        booking_reference: m.booking_reference,
        customer_id: m.customer_id,
        service_type: m.service_type,
        pickup_location: m.pickup_location,
        dropoff_location: m.dropoff_location,
        pickup_datetime: m.pickup_datetime,
        number_of_passengers: m.number_of_passengers,
        special_requirements: m.special_requirements,
        status,
        created_at: m.created_at,
    })
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn insert(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Inserting booking: {}", b.booking_reference);

        let model = booking::ActiveModel {
            booking_reference: Set(b.booking_reference),
            customer_id: Set(b.customer_id),
            service_type: Set(b.service_type),
            pickup_location: Set(b.pickup_location),
            dropoff_location: Set(b.dropoff_location),
            pickup_datetime: Set(b.pickup_datetime),
            number_of_passengers: Set(b.number_of_passengers),
            special_requirements: Set(b.special_requirements),
            status: Set(b.status.as_str().to_string()),
            created_at: Set(b.created_at),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await?;
        model_to_domain(inserted)
    }

    async fn find_by_reference(&self, reference: &str) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find()
            .filter(booking::Column::BookingReference.eq(reference))
            .one(&self.db)
            .await?;
        model.map(model_to_domain).transpose()
    }
}
