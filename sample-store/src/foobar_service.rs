//! Foobar domain service.

use std::sync::Arc;

use sample_core::Foobar;

use crate::{Datasource, StoreError};

/// Tag that marks a row as a foobar.
const FOOBAR_TAG: &str = "foobar";

/// Higher-level read service over the foobar rows.
///
/// Delegates to the injected [`Datasource`]; owns no state of its own.
pub struct FoobarService {
    datasource: Arc<dyn Datasource>,
}

impl FoobarService {
    /// Create a service over the given datasource.
    #[must_use]
    pub fn new(datasource: Arc<dyn Datasource>) -> Self {
        Self { datasource }
    }

    /// Return every row tagged as a foobar.
    ///
    /// # Errors
    /// Propagates [`StoreError`] from the datasource unchanged.
    pub async fn get_foobars(&self) -> Result<Vec<Foobar>, StoreError> {
        self.datasource.query_by_tag(FOOBAR_TAG).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[tokio::test]
    async fn get_foobars_returns_only_foobar_tagged_rows() {
        let store = Arc::new(MemoryStore::with_rows(vec![
            Foobar::with_tag("a", "foobar"),
            Foobar::with_tag("b", "other"),
            Foobar::new("c"),
        ]));
        let service = FoobarService::new(store);
        let rows = match service.get_foobars().await {
            Ok(r) => r,
            Err(e) => panic!("get_foobars failed: {e}"),
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "a");
    }
}
