// News provider API module.
// Provides the caching client, query shapes, and response types.

pub mod client;
pub mod endpoints;
pub mod query;
pub mod types;

pub use client::NewsClient;
pub use query::{Endpoint, Query};
pub use types::*;
