use async_trait::async_trait;
use nf_core::{Error, Headlines, Result};
use serde_json::Value;
use tracing::debug;

#[async_trait]
pub trait NewsGateway: Send + Sync {
    /// Fetch one page of headlines for a category.
    async fn top_headlines(&self, category: &str) -> Result<Headlines>;
}

/// Production gateway talking to the proxy endpoint over HTTP.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NewsGateway for HttpGateway {
    async fn top_headlines(&self, category: &str) -> Result<Headlines> {
        debug!(category = %category, "requesting headlines");
        let response = self
            .http
            .get(self.base_url.as_str())
            .query(&[("category", category)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .unwrap_or_else(|| status.to_string());
            return Err(Error::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        // A success body that does not parse counts as malformed; the
        // controller folds the empty envelope into the no-articles message.
        Ok(response.json::<Headlines>().await.unwrap_or_default())
    }
}
