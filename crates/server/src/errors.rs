use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{error, warn};

const MSG_URL_TAKEN: &str = "url is already used by another product";
const MSG_STORAGE: &str = "storage failure";

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rej: JsonRejection) -> Self {
        Self::new(rej.status(), "Invalid Request Body", Some(rej.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rej: PathRejection) -> Self {
        Self::new(rej.status(), "Invalid Path", Some(rej.body_text()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Conflict(_) => {
                warn!(err = %e, "slug conflict");
                Self::new(StatusCode::CONFLICT, "Conflict", Some(MSG_URL_TAKEN.into()))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(MSG_STORAGE.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: JsonApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn storage_errors_hide_driver_detail() {
        let err = ServiceError::Db(r#"near "SELEC": syntax error"#.into());
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal Server Error", "message": "storage failure"}));
    }

    #[tokio::test]
    async fn conflicts_hide_driver_detail() {
        let err = ServiceError::Conflict("UNIQUE constraint failed: products.slug".into());
        let (status, body) = body_of(err.into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(!body.to_string().contains("products.slug"), "{body}");
        assert_eq!(body["error"], "Conflict");
    }
}
