use async_trait::async_trait;
use models::product::{Model, ProductPatch};
use sea_orm::DatabaseConnection;

use crate::db::product_service;
use crate::errors::ServiceError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn upsert(&self, url: &str, name: &str, price: i64) -> Result<Model, ServiceError>;
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn upsert(&self, url: &str, name: &str, price: i64) -> Result<Model, ServiceError> {
        product_service::upsert_product(&self.db, url, name, price).await
    }

    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        product_service::list_products(&self.db).await
    }

    async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        product_service::get_product(&self.db, id).await
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Model>, ServiceError> {
        product_service::update_product(&self.db, id, patch).await
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        product_service::delete_product(&self.db, id).await
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        product_service::delete_all_products(&self.db).await
    }
}
