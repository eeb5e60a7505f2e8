use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;

use crate::application::errors::StorageError;
use crate::domain::entities::{CreateFeedParams, CreateUserParams, FeedRecord, FeedSummary, User};
use crate::domain::traits::Repository;

/// SQLite-backed repository
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        let repo = Self { conn };
        repo.init_tables()?;
        Ok(repo)
    }

    fn init_tables(&self) -> Result<(), StorageError> {
        // Needed for feeds to follow their owner on delete
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id BLOB PRIMARY KEY,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                name TEXT UNIQUE NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS feeds (
                id BLOB PRIMARY KEY,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                name TEXT NOT NULL,
                url TEXT UNIQUE NOT NULL,
                user_id BLOB NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_feeds_user ON feeds(user_id)",
            [],
        )?;

        Ok(())
    }
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
        name: row.get(3)?,
    })
}

impl Repository for SqliteRepository {
    fn get_user(&self, name: &str) -> Result<Option<User>, StorageError> {
        let user = self
            .conn
            .query_row(
                "SELECT id, created_at, updated_at, name FROM users WHERE name = ?1",
                [name],
                user_from_row,
            )
            .optional()?;
        Ok(user)
    }

    fn create_user(&self, params: CreateUserParams) -> Result<User, StorageError> {
        self.conn.execute(
            "INSERT INTO users (id, created_at, updated_at, name) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![params.id, params.created_at, params.updated_at, params.name],
        )?;

        Ok(User {
            id: params.id,
            created_at: params.created_at,
            updated_at: params.updated_at,
            name: params.name,
        })
    }

    fn delete_all_users(&self) -> Result<(), StorageError> {
        let rows = self.conn.execute("DELETE FROM users", [])?;
        tracing::debug!("Deleted {} users", rows);
        Ok(())
    }

    fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, created_at, updated_at, name FROM users ORDER BY created_at, name")?;

        let rows = stmt.query_map([], user_from_row)?;

        let mut users = Vec::new();
        for user in rows {
            users.push(user?);
        }
        Ok(users)
    }

    fn create_feed(&self, params: CreateFeedParams) -> Result<FeedRecord, StorageError> {
        self.conn.execute(
            "INSERT INTO feeds (id, created_at, updated_at, name, url, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                params.id,
                params.created_at,
                params.updated_at,
                params.name,
                params.url,
                params.user_id
            ],
        )?;

        Ok(FeedRecord {
            id: params.id,
            created_at: params.created_at,
            updated_at: params.updated_at,
            name: params.name,
            url: params.url,
            user_id: params.user_id,
        })
    }

    fn list_feeds(&self) -> Result<Vec<FeedSummary>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT f.name, f.url, u.name
             FROM feeds f
             JOIN users u ON u.id = f.user_id
             ORDER BY f.created_at, f.name",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(FeedSummary {
                name: row.get(0)?,
                url: row.get(1)?,
                user_name: row.get(2)?,
            })
        })?;

        let mut feeds = Vec::new();
        for feed in rows {
            feeds.push(feed?);
        }
        Ok(feeds)
    }
}
