use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A syndication document as parsed from the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub items: Vec<FeedItem>,
}

/// One entry of a parsed feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Raw text, not parsed as a timestamp
    pub pub_date: String,
}

/// A feed source tracked in the database, owned by a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

/// Parameters for inserting a new feed record
#[derive(Debug, Clone)]
pub struct CreateFeedParams {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub url: String,
    pub user_id: Uuid,
}

impl CreateFeedParams {
    pub fn new(name: impl Into<String>, url: impl Into<String>, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.into(),
            url: url.into(),
            user_id,
        }
    }
}

/// Listing row: a feed together with the name of the user who added it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub name: String,
    pub url: String,
    pub user_name: String,
}

impl fmt::Display for FeedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> (id: {}, user: {})", self.name, self.url, self.id, self.user_id)
    }
}

impl fmt::Display for FeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> added by {}", self.name, self.url, self.user_name)
    }
}
