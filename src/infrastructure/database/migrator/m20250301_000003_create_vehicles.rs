//! Create vehicles table

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_brands::Brands;
use super::m20250301_000002_create_vehicle_models::VehicleModels;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::ExternalId).string())
                    .col(
                        ColumnDef::new(Vehicles::Name)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::BrandId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::ModelId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_brand")
                            .from(Vehicles::Table, Vehicles::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicles_model")
                            .from(Vehicles::Table, Vehicles::ModelId)
                            .to(VehicleModels::Table, VehicleModels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Dedup lookups during imports hit this index on every row
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_external_id")
                    .table(Vehicles::Table)
                    .col(Vehicles::ExternalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vehicles {
    Table,
    Id,
    ExternalId,
    Name,
    BrandId,
    ModelId,
    CreatedAt,
    UpdatedAt,
}
