//! Shipment tracking history entity (append-only)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::shipment::ShipmentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipment_tracking_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub shipment_id: i32,
    pub status: ShipmentStatus,
    pub location: String,
    pub description: String,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipment::Entity",
        from = "Column::ShipmentId",
        to = "super::shipment::Column::Id",
        on_delete = "Cascade"
    )]
    Shipment,
}

impl Related<super::shipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
