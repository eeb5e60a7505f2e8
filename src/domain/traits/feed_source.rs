use crate::application::errors::FeedError;
use crate::domain::entities::Feed;

/// Anything that can turn a feed URL into a parsed feed
pub trait FeedSource {
    fn fetch(&self, url: &str) -> Result<Feed, FeedError>;
}
