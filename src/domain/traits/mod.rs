//! Domain traits - Abstractions implemented by infrastructure

pub mod store;
pub mod feed_source;

pub use store::{Repository, ConfigStore};
pub use feed_source::FeedSource;
