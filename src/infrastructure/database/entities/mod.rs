//! Database entities module

pub mod booking;
pub mod shipment;
pub mod shipment_tracking_history;
