use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title the provider substitutes on articles it has pulled.
pub const REMOVED_TITLE: &str = "[Removed]";

/// Upstream headlines envelope: `{ status, message?, articles? }`.
///
/// Deserialization is lenient so a structurally odd payload degrades to an
/// empty article list instead of a hard failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Headlines {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Headlines {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl Article {
    /// An article with no title, or the provider's removed marker, is never shown.
    pub fn is_displayable(&self) -> bool {
        match self.title.as_deref() {
            Some(title) => !title.is_empty() && title != REMOVED_TITLE,
            None => false,
        }
    }

    /// Canonical URL, if it is actually usable as a link target.
    pub fn link(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty() && *url != "null" && *url != "undefined")
    }
}
