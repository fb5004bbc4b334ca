//! Application services

mod booking;
mod tracking;

pub use booking::BookingService;
pub use tracking::{EmptyHistoryPolicy, TrackingService};
