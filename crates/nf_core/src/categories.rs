/// Provider-defined topic filter for headline selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_CATEGORY: &str = "general";

pub const CATEGORIES: &[Category] = &[
    Category { key: "general", label: "General" },
    Category { key: "business", label: "Business" },
    Category { key: "entertainment", label: "Entertainment" },
    Category { key: "health", label: "Health" },
    Category { key: "science", label: "Science" },
    Category { key: "sports", label: "Sports" },
    Category { key: "technology", label: "Technology" },
];

/// Display label for a category key, falling back to the key itself for
/// categories outside the table (the proxy never validates them either).
pub fn label_for(key: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|c| c.key == key)
        .map(|c| c.label)
        .unwrap_or(key)
}
