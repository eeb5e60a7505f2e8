//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration file loading and current-user persistence
//! - Database: SQLite repository
//! - Fetcher: HTTP retrieval and parsing of RSS feeds

pub mod config;
pub mod database;
pub mod fetcher;
