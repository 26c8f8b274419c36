use std::sync::Arc;

use nf_core::{Article, Error, Headlines, Result, DEFAULT_CATEGORY};
use tracing::{debug, warn};

use crate::gateway::NewsGateway;
use crate::state::{
    ViewState, MSG_CREDENTIAL, MSG_GENERIC, MSG_NO_ARTICLES, MSG_NO_VALID_ARTICLES,
    MSG_OFFLINE, MSG_RATE_LIMITED,
};

/// Classified fetch failure, one user-facing message per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Offline,
    RateLimited,
    Credential,
    Other,
}

impl FailureKind {
    pub fn classify(error: &Error) -> Self {
        match error {
            Error::Http(e) if e.is_connect() || e.is_timeout() => Self::Offline,
            Error::Upstream { status: 429, .. } => Self::RateLimited,
            Error::Upstream { status: 401, .. } => Self::Credential,
            _ => Self::Other,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Offline => MSG_OFFLINE,
            Self::RateLimited => MSG_RATE_LIMITED,
            Self::Credential => MSG_CREDENTIAL,
            Self::Other => MSG_GENERIC,
        }
    }
}

/// Owns the widget's UI state: selected category, dropdown flag, and the
/// view state of the current fetch cycle.
pub struct NewsController {
    gateway: Arc<dyn NewsGateway>,
    category: String,
    dropdown_open: bool,
    seq: u64,
    state: ViewState,
}

impl NewsController {
    pub fn new(gateway: Arc<dyn NewsGateway>) -> Self {
        Self {
            gateway,
            category: DEFAULT_CATEGORY.to_string(),
            dropdown_open: false,
            seq: 0,
            state: ViewState::Idle,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Outside-click dismissal.
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// First load: fetch the default category.
    pub async fn init(&mut self) {
        self.fetch_news().await;
    }

    pub async fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.dropdown_open = false;
        self.fetch_news().await;
    }

    /// Run one full fetch cycle against the gateway.
    pub async fn fetch_news(&mut self) {
        let token = self.begin_fetch();
        let category = self.category.clone();
        let outcome = self.gateway.top_headlines(&category).await;
        self.apply_outcome(token, outcome);
    }

    /// Start a fetch cycle: allocate the next token and enter `Loading`.
    ///
    /// Tokens are monotonically increasing; together with [`apply_outcome`]
    /// they guarantee a slow response can never overwrite the result of a
    /// fetch that started after it.
    ///
    /// [`apply_outcome`]: NewsController::apply_outcome
    pub fn begin_fetch(&mut self) -> u64 {
        self.seq += 1;
        self.state = ViewState::Loading;
        self.seq
    }

    /// Apply a fetch outcome. Outcomes carrying a superseded token are
    /// discarded.
    pub fn apply_outcome(&mut self, token: u64, outcome: Result<Headlines>) {
        if token != self.seq {
            debug!(token, current = self.seq, "discarding stale fetch outcome");
            return;
        }

        self.state = match outcome {
            Ok(headlines) if headlines.is_ok() && !headlines.articles.is_empty() => {
                let valid: Vec<Article> = headlines
                    .articles
                    .into_iter()
                    .filter(Article::is_displayable)
                    .collect();
                if valid.is_empty() {
                    ViewState::Message(MSG_NO_VALID_ARTICLES.to_string())
                } else {
                    ViewState::Rendered(valid)
                }
            }
            Ok(_) => ViewState::Message(MSG_NO_ARTICLES.to_string()),
            Err(error) => {
                let kind = FailureKind::classify(&error);
                warn!(error = %error, ?kind, "fetch failed");
                ViewState::Message(kind.message().to_string())
            }
        };
    }
}
