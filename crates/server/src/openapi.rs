use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::products::{NewProduct, ProductModel, UpdateProduct};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `{"message": ..., "id": ...}`; `id` only when a single product was touched.
#[derive(ToSchema)]
pub struct MessageDoc { pub message: String, pub id: Option<i64> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::delete_all,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            NewProduct,
            UpdateProduct,
            ProductModel,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
