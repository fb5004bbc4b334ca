//! Tracking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::error;

use crate::application::TrackingService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{ApiError, MessageResponse};

use super::dto::*;

/// Application state for tracking handlers.
#[derive(Clone)]
pub struct TrackingAppState {
    pub tracking: Arc<TrackingService>,
}

async fn lookup(state: &TrackingAppState, tracking_number: &str) -> Result<Json<TrackingResponse>, ApiError> {
    match state.tracking.lookup(tracking_number).await {
        Ok(tracking) => Ok(Json(tracking.into())),
        Err(DomainError::Validation(_)) => Err(ApiError::bad_request(TRACKING_ID_REQUIRED)),
        Err(DomainError::NotFound { .. }) => Err(ApiError::not_found(TRACKING_NOT_FOUND)),
        Err(e) => {
            error!("Tracking lookup for {:?} failed: {}", tracking_number, e);
            Err(ApiError::unavailable(TRACKING_UNAVAILABLE))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/tracking",
    tag = "Tracking",
    params(TrackingQuery),
    responses(
        (status = 200, description = "Shipment snapshot with history, newest first", body = TrackingResponse),
        (status = 400, description = "Tracking ID missing", body = MessageResponse),
        (status = 404, description = "Tracking ID not found", body = MessageResponse),
        (status = 503, description = "Data store unavailable", body = MessageResponse)
    )
)]
pub async fn get_tracking(
    State(state): State<TrackingAppState>,
    Query(query): Query<TrackingQuery>,
) -> Result<Json<TrackingResponse>, ApiError> {
    lookup(&state, query.id.as_deref().unwrap_or_default()).await
}

#[utoipa::path(
    get,
    path = "/api/v1/tracking/{tracking_number}",
    tag = "Tracking",
    params(("tracking_number" = String, Path, description = "Shipment tracking number")),
    responses(
        (status = 200, description = "Shipment snapshot with history, newest first", body = TrackingResponse),
        (status = 404, description = "Tracking ID not found", body = MessageResponse),
        (status = 503, description = "Data store unavailable", body = MessageResponse)
    )
)]
pub async fn get_tracking_by_number(
    State(state): State<TrackingAppState>,
    Path(tracking_number): Path<String>,
) -> Result<Json<TrackingResponse>, ApiError> {
    lookup(&state, &tracking_number).await
}
