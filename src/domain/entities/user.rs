use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Represents a registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

/// Parameters for inserting a new user
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
}

impl CreateUserParams {
    /// Fresh id, both timestamps set to now
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id: {}, created: {})",
            self.name,
            self.id,
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
