//! Create vehicle_statuses table

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_vehicles::Vehicles;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleStatuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleStatuses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleStatuses::CurrentChargeLevel)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VehicleStatuses::Status)
                            .string_len(50)
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(VehicleStatuses::VehicleId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleStatuses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleStatuses::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_statuses_vehicle")
                            .from(VehicleStatuses::Table, VehicleStatuses::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One status row per vehicle
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_statuses_vehicle")
                    .table(VehicleStatuses::Table)
                    .col(VehicleStatuses::VehicleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleStatuses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum VehicleStatuses {
    Table,
    Id,
    CurrentChargeLevel,
    Status,
    VehicleId,
    CreatedAt,
    UpdatedAt,
}
