//! Error types for the store crate.

/// Errors that can occur while serving read queries.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The datasource cannot serve the query.
    #[error("datasource unavailable: {reason}")]
    Unavailable { reason: String },
}
