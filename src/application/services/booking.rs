//! Booking creation and lookup

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::domain::booking::generate_reference;
use crate::domain::{Booking, DomainError, DomainResult, NewBooking, RepositoryProvider};

/// Service for booking business operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    reference_prefix: String,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, reference_prefix: impl Into<String>) -> Self {
        Self {
            repos,
            reference_prefix: reference_prefix.into(),
        }
    }

    /// Persist a validated booking request under a freshly generated
    /// reference. Single insert, no retry: a failed insert leaves no row.
    pub async fn create(&self, request: NewBooking) -> DomainResult<Booking> {
        let now = Utc::now();
        let reference = generate_reference(&self.reference_prefix, now, &mut rand::thread_rng());
        let booking = Booking::from_request(request, reference, now);

        match self.repos.bookings().insert(booking).await {
            Ok(created) => {
                metrics::counter!("bookings_created_total").increment(1);
                info!(
                    "Booking created: {} (customer {}, {} → {})",
                    created.booking_reference,
                    created.customer_id,
                    created.pickup_location,
                    created.dropoff_location
                );
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create booking: {}", e);
                Err(e)
            }
        }
    }

    /// Find a booking by its external reference
    pub async fn find(&self, reference: &str) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_reference(reference.trim())
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Booking",
                field: "booking_reference",
                value: reference.to_string(),
            })
    }
}
