//! Domain entities - Core business objects

pub mod user;
pub mod feed;
pub mod command;

pub use user::{User, CreateUserParams};
pub use feed::{Feed, FeedItem, FeedRecord, CreateFeedParams, FeedSummary};
pub use command::Command;
