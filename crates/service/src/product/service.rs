use std::sync::Arc;
use models::product::{Model, ProductPatch};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Application service over a product repository.
/// Cloning is cheap; handlers get their own copy through router state.
pub struct ProductService<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, name))]
    pub async fn create(&self, url: &str, name: &str, price: i64) -> Result<Model, ServiceError> {
        let saved = self.repo.upsert(url, name, price).await?;
        info!(id = saved.id, slug = %saved.slug, price = saved.price, "product upserted");
        Ok(saved)
    }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Model>, ServiceError> { self.repo.get(id).await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Option<Model>, ServiceError> {
        let updated = self.repo.update(id, patch).await?;
        match &updated {
            Some(m) => info!(id = m.id, slug = %m.slug, "product updated"),
            None => info!("product to update not found"),
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        info!(deleted, "product delete");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<u64, ServiceError> {
        let count = self.repo.delete_all().await?;
        info!(count, "all products deleted");
        Ok(count)
    }
}
