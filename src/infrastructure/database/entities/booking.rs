//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub booking_reference: String,

    pub customer_id: i64,
    pub service_type: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_datetime: String,

    #[sea_orm(nullable)]
    pub number_of_passengers: Option<i32>,

    #[sea_orm(nullable, column_type = "Text")]
    pub special_requirements: Option<String>,

    /// Booking status: pending, confirmed, completed, cancelled
    pub status: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
