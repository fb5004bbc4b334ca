//! Booking aggregate
//!
//! Contains the Booking entity, reference generation, and repository interface.

pub mod model;
pub mod reference;
pub mod repository;

pub use model::{Booking, BookingStatus, NewBooking, UnknownBookingStatus};
pub use reference::{generate_reference, is_reference, DEFAULT_REFERENCE_PREFIX};
pub use repository::BookingRepository;
