use nf_core::Article;

/// Display state of one fetch cycle. Every new fetch re-enters `Loading`
/// regardless of what was on screen before.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Rendered(Vec<Article>),
    Message(String),
}

pub const MSG_NO_ARTICLES: &str = "No news articles found for this category.";
pub const MSG_NO_VALID_ARTICLES: &str = "No valid articles found.";
pub const MSG_OFFLINE: &str =
    "No internet connection. Please check your connection and try again.";
pub const MSG_RATE_LIMITED: &str = "Too many requests. Please wait a moment and try again.";
pub const MSG_CREDENTIAL: &str = "API key issue. Please check the configuration.";
pub const MSG_GENERIC: &str = "Failed to load news. Please try again later.";
