//! Earthquake feed: retrieval and typed record validation.

pub mod client;
pub mod record;

pub use client::{FeedSource, UsgsFeedClient};
pub use record::{Earthquake, FeedCollection};
