//! Seeded in-memory datasource.
//!
//! Holds the demo row set behind an `RwLock`. Queries clone out of the
//! lock so callers never observe partially-updated state.

use std::sync::RwLock;

use async_trait::async_trait;
use sample_core::Foobar;

use crate::{Datasource, StoreError};

/// In-memory implementation of [`Datasource`].
#[derive(Debug)]
pub struct MemoryStore {
    rows: RwLock<Vec<Foobar>>,
}

impl MemoryStore {
    /// Create a store seeded with the demo data set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rows(vec![
            Foobar::with_tag("first", "foobar"),
            Foobar::with_tag("second", "foobar"),
            Foobar::new("third"),
            Foobar::with_tag("fourth", "sample"),
        ])
    }

    /// Create a store over an explicit row set.
    #[must_use]
    pub fn with_rows(rows: Vec<Foobar>) -> Self {
        Self { rows: RwLock::new(rows) }
    }

    /// Snapshot the current rows.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread
    /// panicked while holding the write lock).
    fn snapshot(&self) -> Vec<Foobar> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        self.rows
            .read()
            .expect("memory store read lock poisoned")
            .clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Datasource for MemoryStore {
    async fn query_first_set(&self) -> Result<Vec<Foobar>, StoreError> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(rows = rows.len(), "query_first_set served");
        Ok(rows)
    }

    async fn query_by_tag(&self, tag: &str) -> Result<Vec<Foobar>, StoreError> {
        let mut rows = self.snapshot();
        rows.retain(|row| row.tag.as_deref() == Some(tag));
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!(tag, rows = rows.len(), "query_by_tag served");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_set_returns_all_rows_sorted_by_name() {
        let store = MemoryStore::with_rows(vec![
            Foobar::new("bravo"),
            Foobar::new("alpha"),
        ]);
        let rows = match store.query_first_set().await {
            Ok(r) => r,
            Err(e) => panic!("query failed: {e}"),
        };
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["alpha", "bravo"]);
    }

    #[tokio::test]
    async fn by_tag_excludes_untagged_and_other_tags() {
        let store = MemoryStore::with_rows(vec![
            Foobar::with_tag("keep", "foobar"),
            Foobar::with_tag("skip", "sample"),
            Foobar::new("plain"),
        ]);
        let rows = match store.query_by_tag("foobar").await {
            Ok(r) => r,
            Err(e) => panic!("query failed: {e}"),
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "keep");
    }

    #[tokio::test]
    async fn seeded_store_is_non_empty() {
        let store = MemoryStore::new();
        let rows = match store.query_first_set().await {
            Ok(r) => r,
            Err(e) => panic!("query failed: {e}"),
        };
        assert!(!rows.is_empty(), "demo seed must contain rows");
    }
}
