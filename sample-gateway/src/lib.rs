//! HTTP gateway for the Sample API service.
//!
//! Exposes the `/sample` route group: configuration lookups, greeting
//! routes demonstrating query/path/body binding, read passthroughs to
//! the database and foobar collaborators, and a role-gated admin route.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod guard;
pub mod routes;
