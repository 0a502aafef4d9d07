//! SeaORM implementation of BrandRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{Brand, BrandRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::brand;

fn entity_to_domain(b: brand::Model) -> Brand {
    Brand {
        id: b.id,
        name: b.name,
        created_at: b.created_at,
        updated_at: b.updated_at,
    }
}

pub struct SeaOrmBrandRepository {
    db: DatabaseConnection,
}

impl SeaOrmBrandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandRepository for SeaOrmBrandRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Brand>> {
        let model = brand::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Brand>> {
        let model = brand::Entity::find()
            .filter(brand::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Brand>> {
        let models = brand::Entity::find()
            .order_by_asc(brand::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, b: Brand) -> DomainResult<Brand> {
        let model = brand::ActiveModel {
            id: Set(b.id),
            name: Set(b.name),
            created_at: Set(b.created_at),
            updated_at: Set(b.updated_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Brand saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, b: Brand) -> DomainResult<()> {
        let existing = brand::Entity::find_by_id(&b.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Brand",
                field: "id",
                value: b.id,
            });
        };

        let model = brand::ActiveModel {
            id: Set(b.id),
            name: Set(b.name),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let result = brand::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Brand",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}
