use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::product::{self, ProductPatch};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{errors::JsonApiError, routes::ServerState};

pub const MSG_ADDED: &str = "Product added";
pub const MSG_UPDATED: &str = "Product updated";
pub const MSG_DELETED: &str = "Product deleted";
pub const MSG_ALL_DELETED: &str = "All products deleted";
pub const MSG_NOT_FOUND: &str = "Product not found";

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub url: String,
    pub price: i64,
}

/// Absent or `null` fields keep their stored value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
}

impl From<UpdateProduct> for ProductPatch {
    fn from(u: UpdateProduct) -> Self {
        ProductPatch::from_input(u.name, u.url.as_deref(), u.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub price: i64,
}

impl From<product::Model> for ProductModel {
    fn from(m: product::Model) -> Self {
        let url = m.url();
        Self { id: m.id, name: m.name, url, price: m.price }
    }
}

/// Single-product lookups answer 200 either way; a miss carries only a message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProductLookup {
    Found(ProductModel),
    Missing(Message),
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Created or updated by slug", body = crate::openapi::MessageDoc),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Missing or mistyped fields"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(input) = payload?;
    let saved = state.products.create(&input.url, &input.name, input.price).await?;
    Ok((StatusCode::CREATED, Json(Message::with_id(MSG_ADDED, saved.id))))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "All products ordered by name", body = [ProductModel]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductModel>>, JsonApiError> {
    let rows = state.products.list().await?;
    info!(count = rows.len(), "list products");
    Ok(Json(rows.into_iter().map(ProductModel::from).collect()))
}

#[utoipa::path(
    delete, path = "/products", tag = "products",
    responses(
        (status = 200, description = "All rows removed", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete_all(State(state): State<ServerState>) -> Result<Json<Message>, JsonApiError> {
    state.products.delete_all().await?;
    Ok(Json(Message::new(MSG_ALL_DELETED)))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product, or a not-found message", body = ProductModel),
        (status = 400, description = "Non-integer id")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ProductLookup>, JsonApiError> {
    let Path(id) = id?;
    let lookup = match state.products.get(id).await? {
        Some(m) => ProductLookup::Found(m.into()),
        None => ProductLookup::Missing(Message::new(MSG_NOT_FOUND)),
    };
    Ok(Json(lookup))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated, or a not-found message", body = crate::openapi::MessageDoc),
        (status = 409, description = "New url collides with another product"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let msg = match state.products.update(id, input.into()).await? {
        Some(m) => Message::with_id(MSG_UPDATED, m.id),
        None => Message::new(MSG_NOT_FOUND),
    };
    Ok(Json(msg))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted, or a not-found message", body = crate::openapi::MessageDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    let msg = if state.products.delete(id).await? {
        Message::new(MSG_DELETED)
    } else {
        Message::new(MSG_NOT_FOUND)
    };
    Ok(Json(msg))
}
