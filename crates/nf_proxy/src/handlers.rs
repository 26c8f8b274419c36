use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;
use crate::upstream;

pub const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

pub async fn top_headlines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Response {
    let category = query
        .category
        .unwrap_or_else(|| state.config.default_category.clone());

    match upstream::forward(&state, &category).await {
        Ok(relay) => {
            info!(category = %category, status = relay.status, "relaying upstream response");
            // reqwest and axum sit on different http majors, so the status
            // crosses the boundary as a u16.
            let status =
                StatusCode::from_u16(relay.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(relay.body)).into_response()
        }
        Err(err) => {
            error!(category = %category, error = %err, "upstream request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": INTERNAL_ERROR })),
            )
                .into_response()
        }
    }
}
