//! Read-side collaborators for the Sample API service.
//!
//! Provides the `Datasource` query abstraction, a seeded in-memory
//! implementation, and the foobar domain service built on top of it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod datasource;
pub mod error;
pub mod foobar_service;
pub mod memory;

pub use datasource::Datasource;
pub use error::StoreError;
pub use foobar_service::FoobarService;
pub use memory::MemoryStore;
