use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::FoobarId;

/// A row in the foobar table.
///
/// This is the record shape both read collaborators return; handlers
/// treat it as opaque and serialize it straight into responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Foobar {
    /// Unique identifier for this row.
    pub id: FoobarId,
    /// Human-readable row name.
    pub name: String,
    /// Optional classification tag, e.g. `"foobar"`.
    pub tag: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl Foobar {
    /// Create an untagged row with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FoobarId::new(),
            name: name.into(),
            tag: None,
            created_at: Utc::now(),
        }
    }

    /// Create a tagged row.
    #[must_use]
    pub fn with_tag(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::new(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_has_no_tag() {
        let row = Foobar::new("plain");
        assert_eq!(row.name, "plain");
        assert_eq!(row.tag, None);
    }

    #[test]
    fn with_tag_sets_tag() {
        let row = Foobar::with_tag("tagged", "foobar");
        assert_eq!(row.tag.as_deref(), Some("foobar"));
    }
}
