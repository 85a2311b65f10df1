//! admin-core: Shared infrastructure for the childcare admin console.
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod observability;
