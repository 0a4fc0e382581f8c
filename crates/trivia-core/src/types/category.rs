//! Category types.

use serde::{Deserialize, Serialize};

/// A question category.
///
/// The category set is seeded once when the store is created and is
/// read-only afterwards; there are no endpoints that mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique, stable identifier.
    pub id: i64,
    /// Human-readable label ("Science", "Art", ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Labels seeded into an empty store so a fresh server is playable.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_type_field() {
        let category = Category::new(1, "Science");
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"id":1,"type":"Science"}"#);

        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }
}
