//! Create shipments table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shipments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Shipments::TrackingNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Shipments::CurrentStatus)
                            .string_len(20)
                            .not_null()
                            .default("received"),
                    )
                    .col(
                        ColumnDef::new(Shipments::CurrentLocation)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Shipments::EstimatedDelivery)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shipments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Shipments {
    Table,
    Id,
    TrackingNumber,
    CurrentStatus,
    CurrentLocation,
    EstimatedDelivery,
}
