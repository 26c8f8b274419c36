use chrono::{DateTime, Utc};
use nf_core::{categories, Article, CATEGORIES};

use crate::controller::NewsController;
use crate::state::ViewState;

pub const NO_DESCRIPTION: &str = "No description available.";

/// Escape text for insertion into HTML content or attribute values. All
/// article fields are untrusted.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Display form of the published timestamp, e.g. "Jan 1, 2024". An absent
/// timestamp renders as an empty slot rather than an artifact.
pub fn format_published(published_at: Option<&DateTime<Utc>>) -> String {
    published_at
        .map(|ts| ts.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn render_card(article: &Article) -> String {
    let title = escape_html(article.title.as_deref().unwrap_or_default());
    let description = escape_html(article.description.as_deref().unwrap_or(NO_DESCRIPTION));
    let source = escape_html(article.source.name.as_deref().unwrap_or_default());
    let date = format_published(article.published_at.as_ref());

    let image = match article.url_to_image.as_deref() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="card-image">"#,
            escape_html(src),
            title
        ),
        None => r#"<div class="placeholder-image">📰</div>"#.to_string(),
    };

    let read_more = match article.link() {
        Some(url) => format!(
            r#"<a class="read-more" href="{}" target="_blank" rel="noopener noreferrer">Read Full Article</a>"#,
            escape_html(url)
        ),
        // No usable URL: the action is rendered inert instead of pointing
        // at "null".
        None => r#"<span class="read-more unavailable">Read Full Article</span>"#.to_string(),
    };

    format!(
        r#"<div class="news-card">
  <div class="card-inner">
    {image}
    <h3 class="card-title">{title}</h3>
    <p class="card-description">{description}</p>
    <div class="card-meta">
      <span class="card-source">{source}</span>
      <span class="card-date">{date}</span>
    </div>
    {read_more}
  </div>
</div>"#
    )
}

pub fn render_grid(state: &ViewState) -> String {
    match state {
        ViewState::Idle => r#"<div class="news-grid"></div>"#.to_string(),
        ViewState::Loading => r#"<div class="loading">Loading news...</div>"#.to_string(),
        ViewState::Message(message) => format!(
            r#"<div class="news-grid"><div class="error">{}</div></div>"#,
            escape_html(message)
        ),
        ViewState::Rendered(articles) => {
            let cards: Vec<String> = articles.iter().map(render_card).collect();
            format!("<div class=\"news-grid\">\n{}\n</div>", cards.join("\n"))
        }
    }
}

/// Full page shell: nav with logo anchor, category dropdown, and the grid
/// region driven by the controller's view state.
pub fn render_page(controller: &NewsController) -> String {
    let current = controller.category();
    let open = controller.dropdown_open();

    let items: Vec<String> = CATEGORIES
        .iter()
        .map(|category| {
            let active = if category.key == current { " active" } else { "" };
            format!(
                r#"        <li class="category-item{active}" data-category="{key}">{label}</li>"#,
                key = category.key,
                label = category.label
            )
        })
        .collect();

    let arrow_class = if open {
        "dropdown-arrow rotate"
    } else {
        "dropdown-arrow"
    };
    let dropdown_class = if open {
        "category-dropdown show"
    } else {
        "category-dropdown"
    };
    let label = escape_html(categories::label_for(current));

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>NewsFuse</title>
</head>
<body id="top">
  <nav class="navbar">
    <a class="logo" href="#top">NewsFuse</a>
    <div class="category-selector">
      <button class="category-btn">{label} <span class="{arrow_class}">▼</span></button>
      <ul id="categoryDropdown" class="{dropdown_class}">
{items}
      </ul>
    </div>
  </nav>
  <main>
{grid}
  </main>
</body>
</html>"##,
        items = items.join("\n"),
        grid = render_grid(controller.state()),
    )
}
