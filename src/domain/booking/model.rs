//! Booking domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Booking status.
///
/// Every booking is created `Pending`. No other state is handled by this
/// service, so any other stored value is reported instead of guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
}

/// A stored status this service does not recognise
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status {0:?}")]
pub struct UnknownBookingStatus(pub String);

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            other => Err(UnknownBookingStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booking request that passed boundary validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer_id: i64,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Stored as submitted; format is not checked at this layer
    pub pickup_datetime: String,
    pub number_of_passengers: Option<i32>,
    pub special_requirements: Option<String>,
}

/// A persisted booking
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i32,
    pub booking_reference: String,
    pub customer_id: i64,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_datetime: String,
    pub number_of_passengers: Option<i32>,
    pub special_requirements: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Assemble the record to insert for `request` under `reference`.
    /// `id` is assigned by the store.
    pub fn from_request(request: NewBooking, reference: String, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            booking_reference: reference,
            customer_id: request.customer_id,
            service_type: request.service_type,
            pickup_location: request.pickup_location,
            dropoff_location: request.dropoff_location,
            pickup_datetime: request.pickup_datetime,
            number_of_passengers: request.number_of_passengers,
            special_requirements: request.special_requirements,
            status: BookingStatus::Pending,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_booking_is_pending() {
        let request = NewBooking {
            customer_id: 7,
            service_type: "sedan".into(),
            pickup_location: "CBD".into(),
            dropoff_location: "Airport".into(),
            pickup_datetime: "2024-05-01T08:00:00".into(),
            number_of_passengers: None,
            special_requirements: None,
        };
        let booking = Booking::from_request(request, "TC-BKG-2024-ABC123XYZ".into(), Utc::now());

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.booking_reference, "TC-BKG-2024-ABC123XYZ");
        assert_eq!(booking.customer_id, 7);
        assert_eq!(booking.pickup_datetime, "2024-05-01T08:00:00");
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert_eq!(
            "confirmed".parse::<BookingStatus>(),
            Err(UnknownBookingStatus("confirmed".into()))
        );
    }
}
