//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, warn};

use crate::application::BookingService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    ApiError, MessageResponse, ValidatedJson, ValidatedJsonRejection,
};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Required data missing", body = MessageResponse),
        (status = 503, description = "Booking could not be stored", body = MessageResponse)
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    payload: Result<ValidatedJson<CreateBookingRequest>, ValidatedJsonRejection>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), ApiError> {
    let ValidatedJson(request) = payload.map_err(|rejection| {
        warn!("Rejected booking request: {}", rejection.detail());
        ApiError::bad_request(BOOKING_INCOMPLETE)
    })?;

    let booking = state
        .bookings
        .create(request.into())
        .await
        .map_err(|_| ApiError::unavailable(BOOKING_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: BOOKING_CREATED.to_string(),
            booking_reference: booking.booking_reference,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{booking_reference}",
    tag = "Bookings",
    params(("booking_reference" = String, Path, description = "Booking reference, e.g. TC-BKG-2024-7QX2M0KDA")),
    responses(
        (status = 200, description = "Booking details", body = BookingDto),
        (status = 404, description = "Booking not found", body = MessageResponse),
        (status = 503, description = "Data store unavailable", body = MessageResponse)
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(booking_reference): Path<String>,
) -> Result<Json<BookingDto>, ApiError> {
    match state.bookings.find(&booking_reference).await {
        Ok(booking) => Ok(Json(booking.into())),
        Err(DomainError::NotFound { .. }) => Err(ApiError::not_found(BOOKING_NOT_FOUND)),
        Err(e) => {
            error!("Booking lookup for {:?} failed: {}", booking_reference, e);
            Err(ApiError::unavailable(BOOKING_UNAVAILABLE))
        }
    }
}
