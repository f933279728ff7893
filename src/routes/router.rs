use crate::config::constants;
use crate::config::loader::Config;
use crate::controllers::media::__path_delete;
use crate::controllers::media::__path_upload;
use crate::controllers::media::{delete, method_not_allowed, upload};
use crate::models::delete_dto::{DeleteRequest, DeleteResponse};
use crate::models::error_dto::ErrorBody;
use crate::models::upload_dto::{UploadRequest, UploadResponse};
use crate::services::media_store::MediaStore;
use axum::extract::DefaultBodyLimit;
use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MediaStore>,
    pub config: Config,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        upload,
        delete
    ),
    components(
        schemas(UploadRequest, UploadResponse, DeleteRequest, DeleteResponse, ErrorBody)
    ),
    tags(
        (name = "media", description = "Image upload and deletion endpoints")
    )
)]
struct ApiDoc;

pub fn create_routes(store: Arc<dyn MediaStore>, config: Config) -> Router {
    let state = AppState { store, config };
    Router::new()
        .route(
            "/api/upload-cloudinary-image",
            post(upload).fallback(method_not_allowed),
        )
        .route(
            "/api/delete-cloudinary-image",
            post(delete).fallback(method_not_allowed),
        )
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(DefaultBodyLimit::max(constants::MAX_BODY_BYTES))
}
