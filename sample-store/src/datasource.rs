//! Datasource abstraction trait.
//!
//! Allows swapping the seeded in-memory store for a real database
//! backend without changing the HTTP layer.

use async_trait::async_trait;
use sample_core::Foobar;

use crate::StoreError;

/// Read-query abstraction over the foobar table.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Datasource: Send + Sync {
    /// Run the first canned query: every row, ordered by name.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the datasource cannot serve
    /// the query.
    async fn query_first_set(&self) -> Result<Vec<Foobar>, StoreError>;

    /// Return the rows whose tag equals `tag`, ordered by name.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the datasource cannot serve
    /// the query.
    async fn query_by_tag(&self, tag: &str) -> Result<Vec<Foobar>, StoreError>;
}
