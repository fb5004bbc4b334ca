//! Shipment entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shipment status as stored in `shipments.current_status` and
/// `shipment_tracking_history.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ShipmentStatus {
    #[sea_orm(string_value = "received")]
    Received,
    #[sea_orm(string_value = "in-transit")]
    InTransit,
    #[sea_orm(string_value = "out-for-delivery")]
    OutForDelivery,
    #[sea_orm(string_value = "delivered")]
    Delivered,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub tracking_number: String,

    pub current_status: ShipmentStatus,
    pub current_location: String,
    pub estimated_delivery: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shipment_tracking_history::Entity")]
    TrackingHistory,
}

impl Related<super::shipment_tracking_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackingHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
