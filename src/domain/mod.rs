pub mod booking;
pub mod repositories;
pub mod shipment;

// Re-export commonly used types
pub use booking::{Booking, BookingRepository, BookingStatus, NewBooking};
pub use repositories::{DomainResult, RepositoryProvider};
pub use shipment::{
    Shipment, ShipmentRepository, ShipmentStatus, ShipmentTracking, TrackingHistoryEntry,
};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
