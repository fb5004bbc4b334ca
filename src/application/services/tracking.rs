//! Shipment tracking lookup

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainError, DomainResult, RepositoryProvider, ShipmentTracking};

/// How shipments with an empty history are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyHistoryPolicy {
    /// Indistinguishable from an unknown tracking number
    NotFound,
    /// Returned with an empty history list
    Report,
}

impl EmptyHistoryPolicy {
    pub fn from_flag(report_shipments_without_history: bool) -> Self {
        if report_shipments_without_history {
            Self::Report
        } else {
            Self::NotFound
        }
    }
}

/// Service for tracking number lookups
pub struct TrackingService {
    repos: Arc<dyn RepositoryProvider>,
    empty_history: EmptyHistoryPolicy,
}

impl TrackingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, empty_history: EmptyHistoryPolicy) -> Self {
        Self {
            repos,
            empty_history,
        }
    }

    /// Look up a shipment and its history, newest entry first.
    ///
    /// Errors: `Validation` for a blank tracking number, `NotFound` when no
    /// shipment matches (or it has no history under
    /// [`EmptyHistoryPolicy::NotFound`]), `Storage` on data-access failure.
    pub async fn lookup(&self, tracking_number: &str) -> DomainResult<ShipmentTracking> {
        let tracking_number = tracking_number.trim();
        if tracking_number.is_empty() {
            return Err(DomainError::Validation(
                "tracking number is required".to_string(),
            ));
        }

        let not_found = || DomainError::NotFound {
            entity: "Shipment",
            field: "tracking_number",
            value: tracking_number.to_string(),
        };

        let result = self.repos.shipments().find_tracking(tracking_number).await;
        let outcome = match &result {
            Ok(Some(t)) if t.has_history() => "found",
            Ok(Some(_)) => "no_history",
            Ok(None) => "not_found",
            Err(_) => "error",
        };
        metrics::counter!("tracking_lookups_total", "outcome" => outcome).increment(1);

        let tracking = result?.ok_or_else(not_found)?;

        if !tracking.has_history() && self.empty_history == EmptyHistoryPolicy::NotFound {
            debug!(
                "Shipment {} has no history entries; reporting as not found",
                tracking_number
            );
            return Err(not_found());
        }

        info!(
            "Tracking lookup {}: {} ({} entries)",
            tracking_number,
            tracking.shipment.current_status,
            tracking.history.len()
        );
        Ok(tracking)
    }
}
