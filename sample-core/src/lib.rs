//! Core types for the Sample API service.
//!
//! Defines the row entity returned by the database and foobar
//! collaborators, its identifier, and the role model used by the
//! access guard.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod foobar;
pub mod id;
pub mod role;

pub use foobar::Foobar;
pub use id::FoobarId;
pub use role::{ParseRoleError, Role};
