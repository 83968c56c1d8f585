//! Service layer for the product catalog.
//! - `db` holds the SeaORM statements, one per operation.
//! - `product` wraps them behind a repository trait and an application service.
//! - Slug derivation and the entity live in the `models` crate.

pub mod errors;
pub mod db;
pub mod product;
#[cfg(test)]
pub mod test_support;

pub use product::repository::{ProductRepository, SeaOrmProductRepository};
pub use product::service::ProductService;
