//! Create bookings table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Bookings::BookingReference)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Bookings::ServiceType).string().not_null())
                    .col(ColumnDef::new(Bookings::PickupLocation).string().not_null())
                    .col(ColumnDef::new(Bookings::DropoffLocation).string().not_null())
                    .col(ColumnDef::new(Bookings::PickupDatetime).string().not_null())
                    .col(ColumnDef::new(Bookings::NumberOfPassengers).integer())
                    .col(ColumnDef::new(Bookings::SpecialRequirements).text())
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Bookings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_reference")
                    .table(Bookings::Table)
                    .col(Bookings::BookingReference)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_customer")
                    .table(Bookings::Table)
                    .col(Bookings::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    Id,
    BookingReference,
    CustomerId,
    ServiceType,
    PickupLocation,
    DropoffLocation,
    PickupDatetime,
    NumberOfPassengers,
    SpecialRequirements,
    Status,
    CreatedAt,
}
