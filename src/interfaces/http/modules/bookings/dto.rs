//! Booking DTOs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Booking, NewBooking};

pub const BOOKING_CREATED: &str = "Booking created successfully.";
pub const BOOKING_INCOMPLETE: &str = "Unable to create booking. Data is incomplete.";
pub const BOOKING_FAILED: &str = "Unable to create booking.";
pub const BOOKING_NOT_FOUND: &str = "Booking not found.";
pub const BOOKING_UNAVAILABLE: &str = "Unable to retrieve booking.";

/// Request to create a booking.
///
/// Required fields are checked for presence only: missing, empty, or a
/// zero `customer_id` all count as absent. `validate()` must pass before
/// converting into [`NewBooking`].
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Customer identifier; a number or a numeric string
    #[serde(default, deserialize_with = "customer_id_or_absent")]
    #[validate(required(message = "is required"))]
    #[schema(example = 7)]
    pub customer_id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "sedan")]
    pub service_type: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "CBD")]
    pub pickup_location: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "Airport")]
    pub dropoff_location: String,

    /// Passed through as submitted
    #[serde(default)]
    #[validate(length(min = 1, message = "is required"))]
    #[schema(example = "2024-05-01T08:00:00")]
    pub pickup_datetime: String,

    /// Informational; a number or numeric string, anything else is dropped
    #[serde(default, deserialize_with = "passenger_count")]
    #[schema(example = 2)]
    pub number_of_passengers: Option<i32>,

    /// Free text; numbers and booleans are kept in their text form
    #[serde(default, deserialize_with = "scalar_text")]
    #[schema(example = "Child seat")]
    pub special_requirements: Option<String>,
}

/// `null`, `0` and blank strings all mean "not provided"
fn customer_id_or_absent<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None | Some(Raw::Number(0)) => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => match s.trim() {
            "" | "0" => Ok(None),
            t => t
                .parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid customer_id: {:?}", s))),
        },
    }
}

/// Web forms submit counts as strings. Whole numbers, in either form, are
/// kept; blanks, `null` and anything unparseable become `None`.
fn passenger_count<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(count.and_then(|n| i32::try_from(n).ok()))
}

/// Any JSON scalar as text; arrays and objects are rejected
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "special_requirements must be text, got {}",
            other
        ))),
    }
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(r: CreateBookingRequest) -> Self {
        Self {
            customer_id: r.customer_id.unwrap_or_default(),
            service_type: r.service_type,
            pickup_location: r.pickup_location,
            dropoff_location: r.dropoff_location,
            pickup_datetime: r.pickup_datetime,
            number_of_passengers: r.number_of_passengers,
            special_requirements: r.special_requirements.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Response from creating a booking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingResponse {
    pub message: String,
    /// Generated reference, e.g. `TC-BKG-2024-7QX2M0KDA`
    pub booking_reference: String,
}

/// Booking details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub booking_reference: String,
    pub customer_id: i64,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_datetime: String,
    pub number_of_passengers: Option<i32>,
    pub special_requirements: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            booking_reference: b.booking_reference,
            customer_id: b.customer_id,
            service_type: b.service_type,
            pickup_location: b.pickup_location,
            dropoff_location: b.dropoff_location,
            pickup_datetime: b.pickup_datetime,
            number_of_passengers: b.number_of_passengers,
            special_requirements: b.special_requirements,
            status: b.status.as_str().to_string(),
            created_at: b.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> Result<CreateBookingRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn complete() -> serde_json::Value {
        serde_json::json!({
            "customer_id": 7,
            "service_type": "sedan",
            "pickup_location": "CBD",
            "dropoff_location": "Airport",
            "pickup_datetime": "2024-05-01T08:00:00"
        })
    }

    #[test]
    fn complete_request_validates() {
        let req = parse(complete()).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.number_of_passengers, None);
    }

    #[test]
    fn customer_id_accepts_numeric_string() {
        let mut value = complete();
        value["customer_id"] = serde_json::json!(" 42 ");
        assert_eq!(parse(value).unwrap().customer_id, Some(42));
    }

    #[test]
    fn customer_id_rejects_garbage() {
        let mut value = complete();
        value["customer_id"] = serde_json::json!("abc");
        assert!(parse(value).is_err());
    }

    #[test]
    fn each_missing_required_field_fails_validation() {
        for field in [
            "customer_id",
            "service_type",
            "pickup_location",
            "dropoff_location",
            "pickup_datetime",
        ] {
            let mut value = complete();
            value.as_object_mut().unwrap().remove(field);
            let req = parse(value).unwrap();
            let errors = req.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key(field),
                "{} should be reported",
                field
            );
        }
    }

    #[test]
    fn zero_or_blank_customer_is_missing() {
        for raw in [
            serde_json::json!(0),
            serde_json::json!(""),
            serde_json::Value::Null,
        ] {
            let mut value = complete();
            value["customer_id"] = raw;
            assert!(parse(value).unwrap().validate().is_err());
        }
    }

    #[test]
    fn blank_special_requirements_are_dropped() {
        let mut value = complete();
        value["special_requirements"] = serde_json::json!("  ");
        value["number_of_passengers"] = serde_json::json!(3);
        let booking: NewBooking = parse(value).unwrap().into();
        assert_eq!(booking.special_requirements, None);
        assert_eq!(booking.number_of_passengers, Some(3));
    }

    #[test]
    fn passenger_count_is_lenient() {
        for (raw, expected) in [
            (serde_json::json!(2), Some(2)),
            (serde_json::json!("2"), Some(2)),
            (serde_json::json!(" 4 "), Some(4)),
            (serde_json::json!(3.0), Some(3)),
            (serde_json::json!(""), None),
            (serde_json::json!("a few"), None),
            (serde_json::json!(2.5), None),
            (serde_json::json!(10_000_000_000i64), None),
            (serde_json::Value::Null, None),
        ] {
            let mut value = complete();
            value["number_of_passengers"] = raw.clone();
            let req = parse(value).unwrap();
            assert_eq!(req.number_of_passengers, expected, "{}", raw);
            assert!(req.validate().is_ok());
        }
    }

    #[test]
    fn special_requirements_accepts_scalars() {
        for (raw, expected) in [
            (serde_json::json!(5), Some("5")),
            (serde_json::json!(true), Some("true")),
            (serde_json::json!("Wheelchair access"), Some("Wheelchair access")),
            (serde_json::Value::Null, None),
        ] {
            let mut value = complete();
            value["special_requirements"] = raw;
            let req = parse(value).unwrap();
            assert_eq!(req.special_requirements.as_deref(), expected);
        }

        let mut value = complete();
        value["special_requirements"] = serde_json::json!(["a", "b"]);
        assert!(parse(value).is_err());
    }
}
