//! Shipment aggregate
//!
//! Contains the Shipment entity, its append-only tracking history, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Shipment, ShipmentStatus, ShipmentTracking, TrackingHistoryEntry};
pub use repository::ShipmentRepository;
