//! HTTP boundary for the synergy search service.
//!
//! # Endpoints
//!
//! | Method | Path          | Description                           |
//! |--------|---------------|---------------------------------------|
//! | `POST` | `/api/search` | Run a playstyle keyword search        |
//! | `GET`  | `/health`     | Health check (returns crate version)  |
//!
//! # Error Contract
//!
//! All error responses carry a machine-readable code and a safe message:
//!
//! ```json
//! { "error": { "code": "invalid_query", "message": "keywords are required" } }
//! ```
//!
//! `bad_request` and `invalid_query` map to 400, `corpus_unavailable` to
//! 502. Upstream failure detail is logged, never echoed to the client.

use axum::{
    Json, Router,
    extract::{FromRequest, Request, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::error::SearchError;
use crate::search::SearchResponse;
use crate::service::SearchService;

/// JSON body for `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text playstyle description, comma-separated traits.
    #[serde(default)]
    pub keywords: Option<String>,
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code.to_string(),
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// JSON extractor whose rejections follow the error contract instead of
/// axum's plain-text defaults.
struct ApiJson<T>(T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError {
                status: StatusCode::BAD_REQUEST,
                code: "bad_request",
                message: rejection.body_text(),
            }),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidQuery(message) => Self {
                status: StatusCode::BAD_REQUEST,
                code: "invalid_query",
                message,
            },
            SearchError::CorpusUnavailable(source) => {
                tracing::error!(error = %format!("{source:#}"), "corpus refresh failed");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    code: "corpus_unavailable",
                    message: "item data is currently unavailable, try again later".to_string(),
                }
            }
        }
    }
}

/// Builds the application router.
pub fn router(service: Arc<SearchService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", post(handle_search))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(service)
}

/// Binds `addr` and serves the API until the process is terminated.
pub async fn serve(addr: &str, service: Arc<SearchService>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "synergy search API listening");
    axum::serve(listener, router(service)).await?;
    Ok(())
}

/// Handler for `POST /api/search`.
async fn handle_search(
    State(service): State<Arc<SearchService>>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let raw = request.keywords.unwrap_or_default();
    let response = service.search(&raw).await?;
    Ok(Json(response))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
