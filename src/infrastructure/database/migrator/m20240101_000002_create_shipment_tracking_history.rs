//! Create shipment_tracking_history table
//!
//! Append-only audit trail of shipment status changes. Rows are owned by
//! their shipment and removed with it.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_shipments::Shipments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShipmentTrackingHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::ShipmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::Location)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShipmentTrackingHistory::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tracking_history_shipment")
                            .from(
                                ShipmentTrackingHistory::Table,
                                ShipmentTrackingHistory::ShipmentId,
                            )
                            .to(Shipments::Table, Shipments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tracking_history_shipment_recorded")
                    .table(ShipmentTrackingHistory::Table)
                    .col(ShipmentTrackingHistory::ShipmentId)
                    .col(ShipmentTrackingHistory::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ShipmentTrackingHistory::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum ShipmentTrackingHistory {
    Table,
    Id,
    ShipmentId,
    Status,
    Location,
    Description,
    RecordedAt,
}
