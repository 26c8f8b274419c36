use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;
pub mod upstream;

pub use state::{AppState, ProxyConfig};

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::top_headlines))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use nf_core::{Article, Error, Headlines, Result};
    pub use crate::{AppState, ProxyConfig};
}
