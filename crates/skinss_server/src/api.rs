//! HTTP API over the asset service facade.

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::json;
use skinss_error::{SkinssError, SkinssErrorKind, UploadErrorKind};
use skinss_service::SkinService;
use std::sync::Arc;

/// Model hint request header on skin upload, echoed on skin fetch.
static MODEL_HEADER: HeaderName = HeaderName::from_static("x-skinss-model");

/// Skin uploads are capped at 2 MB.
const SKIN_BODY_LIMIT: usize = 2 * 1024 * 1024;
/// Cape uploads are capped at 8 MB (animated GIFs run large).
const CAPE_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// API state shared across handlers.
#[derive(Clone)]
pub struct ApiState {
    service: Arc<SkinService>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(service: Arc<SkinService>) -> Self {
        Self { service }
    }
}

/// Creates the asset API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/v1/skin/:uuid",
            get(fetch_skin)
                .put(upload_skin)
                .delete(delete_skin)
                .layer(DefaultBodyLimit::max(SKIN_BODY_LIMIT)),
        )
        .route(
            "/v1/cape/:uuid",
            get(fetch_cape)
                .put(upload_cape)
                .delete(delete_cape)
                .layer(DefaultBodyLimit::max(CAPE_BODY_LIMIT)),
        )
        .route("/v1/meta/:uuid", get(fetch_metadata))
        .with_state(state)
}

/// Facade error mapped onto an HTTP response.
struct ApiError(SkinssError);

impl From<SkinssError> for ApiError {
    fn from(err: SkinssError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            SkinssErrorKind::Upload(upload) => match &upload.kind {
                UploadErrorKind::EmptyBody => {
                    (StatusCode::BAD_REQUEST, "empty body".to_string())
                }
                UploadErrorKind::UnsupportedFormat(reason) => {
                    (StatusCode::UNSUPPORTED_MEDIA_TYPE, reason.clone())
                }
            },
            SkinssErrorKind::Storage(storage) => {
                tracing::error!(error = %storage, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage failure".to_string(),
                )
            }
            SkinssErrorKind::Profile(profile) => {
                tracing::error!(error = %profile, "Profile record failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "metadata failure".to_string(),
                )
            }
            other => {
                tracing::error!(error = %other, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// `PUT /v1/skin/:uuid` — raw PNG body, optional `X-Skinss-Model` header.
async fn upload_skin(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let model_hint = headers
        .get(&MODEL_HEADER)
        .and_then(|value| value.to_str().ok());

    let receipt = state.service.upload_skin(&uuid, &body, model_hint).await?;

    Ok(Json(json!({
        "ok": true,
        "skinHash": receipt.skin_hash,
        "model": receipt.model,
    }))
    .into_response())
}

/// `PUT /v1/cape/:uuid` — raw PNG or GIF body.
async fn upload_cape(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let receipt = state.service.upload_cape(&uuid, &body).await?;

    Ok(Json(json!({
        "ok": true,
        "capeHash": receipt.cape_hash,
        "capeIsGif": receipt.cape_is_gif,
    }))
    .into_response())
}

/// `DELETE /v1/skin/:uuid` — succeeds whether or not a skin exists.
async fn delete_skin(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    state.service.delete_skin(&uuid).await?;
    Ok(Json(json!({"ok": true})).into_response())
}

/// `DELETE /v1/cape/:uuid` — succeeds whether or not a cape exists.
async fn delete_cape(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    state.service.delete_cape(&uuid).await?;
    Ok(Json(json!({"ok": true})).into_response())
}

/// `GET /v1/meta/:uuid` — the full profile record, default when absent.
async fn fetch_metadata(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    let profile = state.service.metadata(&uuid).await?;
    Ok(Json(profile).into_response())
}

/// `GET /v1/skin/:uuid` — raw PNG bytes with the recorded model variant in
/// the `X-Skinss-Model` response header.
async fn fetch_skin(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    match state.service.fetch_skin(&uuid).await? {
        Some(asset) => Ok((
            [
                (header::CONTENT_TYPE, "image/png"),
                (MODEL_HEADER.clone(), asset.model.as_str()),
            ],
            asset.data,
        )
            .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// `GET /v1/cape/:uuid` — raw bytes, `image/png` or `image/gif`.
async fn fetch_cape(
    State(state): State<ApiState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    match state.service.fetch_cape(&uuid).await? {
        Some(asset) => Ok((
            [(header::CONTENT_TYPE, asset.content_type())],
            asset.data,
        )
            .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
