use nf_core::Result;
use serde_json::{json, Value};

use crate::state::AppState;

/// Message relayed when the provider rejects a request without saying why.
pub const GENERIC_UPSTREAM_ERROR: &str = "Failed to fetch news";

/// Status and body to hand back to the caller.
#[derive(Debug)]
pub struct Relay {
    pub status: u16,
    pub body: Value,
}

/// Forward one headlines request to the provider, attaching the fixed
/// country, page size, and the server-held credential.
///
/// 2xx responses relay the provider body verbatim. Non-2xx responses are
/// normalized to `{"error": <provider message | fallback>}` with the
/// provider status preserved. Transport and parse failures bubble up as
/// errors for the handler to collapse.
pub async fn forward(state: &AppState, category: &str) -> Result<Relay> {
    let page_size = state.config.page_size.to_string();
    let response = state
        .http
        .get(state.config.upstream.clone())
        .query(&[
            ("country", state.config.country.as_str()),
            ("category", category),
            ("pageSize", page_size.as_str()),
            ("apiKey", state.config.api_key.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if status.is_success() {
        return Ok(Relay {
            status: status.as_u16(),
            body,
        });
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(GENERIC_UPSTREAM_ERROR);

    Ok(Relay {
        status: status.as_u16(),
        body: json!({ "error": message }),
    })
}
