use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    adapters::{
        controllers::{file_controller::FileController, health_controller::HealthController},
        state::AppState,
    },
    domain::config::settings::Settings,
};

pub fn build_router(app_state: AppState, settings: &Settings) -> Router {
    Router::new()
        .route("/health", get(HealthController::health_check))
        .route(
            "/upload",
            post(FileController::upload_file)
                .layer(DefaultBodyLimit::max(settings.max_upload_bytes)),
        )
        .route("/files", get(FileController::list_files))
        .route("/download/{filename}", get(FileController::download_file))
        .layer(cors_layer(settings.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    }
}
