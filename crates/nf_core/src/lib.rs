pub mod categories;
pub mod error;
pub mod types;

pub use categories::{Category, CATEGORIES, DEFAULT_CATEGORY};
pub use error::{Error, Result};
pub use types::{Article, ArticleSource, Headlines};
