pub mod root;
pub mod song;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::MetadataController;
pub use root::health_check_route;
pub use song::{get_lyrics_route, get_metadata_route};

#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<MetadataController>,
}

pub fn app(state: AppState) -> Router {
    // Any origin may call the lookup routes
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check_route))
        .route("/get-lyrics", get(get_lyrics_route))
        .route("/get-metadata", get(get_metadata_route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
