//! Create vehicle_models table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_brands::Brands;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehicleModels::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::BatteryCapacity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::AverageConsumption)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::EmissionGco2)
                            .double()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::Powertrain)
                            .string_len(10)
                            .not_null()
                            .default("BEV"),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::BrandId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehicleModels::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_models_brand")
                            .from(VehicleModels::Table, VehicleModels::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup index for the importer's (name, brand) key. Not unique:
        // concurrent imports may still race, see DESIGN notes
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_models_name_brand")
                    .table(VehicleModels::Table)
                    .col(VehicleModels::Name)
                    .col(VehicleModels::BrandId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleModels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum VehicleModels {
    Table,
    Id,
    Name,
    BatteryCapacity,
    AverageConsumption,
    EmissionGco2,
    Powertrain,
    BrandId,
    CreatedAt,
    UpdatedAt,
}
