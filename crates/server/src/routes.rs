pub mod products;

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use common::types::Health;
use sea_orm::DatabaseConnection;
use service::{ProductService, SeaOrmProductRepository};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Shared handler state; one pool handle behind the product service.
#[derive(Clone)]
pub struct ServerState {
    pub products: ProductService<SeaOrmProductRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmProductRepository::new(db));
        Self { products: ProductService::new(repo) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, OpenAPI document and product CRUD.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let product_routes = Router::new()
        .route(
            "/products",
            get(products::list).post(products::create).delete(products::delete_all),
        )
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(product_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
