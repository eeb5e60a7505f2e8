use crate::application::errors::{ConfigError, StorageError};
use crate::domain::entities::{CreateFeedParams, CreateUserParams, FeedRecord, FeedSummary, User};

/// Repository trait - abstraction for data persistence
pub trait Repository {
    // User operations
    fn get_user(&self, name: &str) -> Result<Option<User>, StorageError>;
    fn create_user(&self, params: CreateUserParams) -> Result<User, StorageError>;
    /// Removes every user along with the feeds they own
    fn delete_all_users(&self) -> Result<(), StorageError>;
    fn list_users(&self) -> Result<Vec<User>, StorageError>;

    // Feed operations
    fn create_feed(&self, params: CreateFeedParams) -> Result<FeedRecord, StorageError>;
    fn list_feeds(&self) -> Result<Vec<FeedSummary>, StorageError>;
}

/// Holds the current user between invocations
pub trait ConfigStore {
    fn current_user(&self) -> Option<&str>;
    /// Sets and persists the current user
    fn set_current_user(&mut self, name: &str) -> Result<(), ConfigError>;
}
