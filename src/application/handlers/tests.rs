//! Handler tests against an in-memory SQLite repository

use super::*;
use crate::application::errors::{ConfigError, FeedError, StorageError};
use crate::application::registry::Outcome;
use crate::application::state::State;
use crate::domain::entities::{Command, Feed, FeedItem};
use crate::domain::traits::{ConfigStore, FeedSource};
use crate::infrastructure::database::SqliteRepository;

/// Config store that never touches disk
#[derive(Default)]
pub(crate) struct MemoryConfig {
    current_user: Option<String>,
}

impl ConfigStore for MemoryConfig {
    fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    fn set_current_user(&mut self, name: &str) -> Result<(), ConfigError> {
        self.current_user = Some(name.to_string());
        Ok(())
    }
}

/// Config store whose writes always fail
pub(crate) struct ReadOnlyConfig;

impl ConfigStore for ReadOnlyConfig {
    fn current_user(&self) -> Option<&str> {
        None
    }

    fn set_current_user(&mut self, _name: &str) -> Result<(), ConfigError> {
        Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only config",
        )))
    }
}

/// Feed source returning a canned feed, or failing with a parse error
pub(crate) struct StubFetcher {
    feed: Option<Feed>,
}

impl FeedSource for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<Feed, FeedError> {
        match &self.feed {
            Some(feed) => Ok(feed.clone()),
            None => Err(rss::Channel::read_from(&b"<html></html>"[..])
                .expect_err("not an rss document")
                .into()),
        }
    }
}

pub(crate) fn test_state() -> State {
    state_with_fetcher(StubFetcher { feed: None })
}

fn state_with_fetcher(fetcher: StubFetcher) -> State {
    let repo = SqliteRepository::open_in_memory().expect("in-memory database");
    State::new(repo, MemoryConfig::default(), fetcher)
}

fn cmd(name: &str, args: &[&str]) -> Command {
    Command::new(name, args.iter().map(|a| a.to_string()).collect())
}

#[test]
fn test_register_creates_user_and_sets_current() {
    let mut state = test_state();

    let outcome = register(&mut state, &cmd("register", &["alice"])).unwrap();

    assert!(matches!(outcome, Outcome::Done(ref msg) if msg.contains("alice")));
    let users = state.repo.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "alice");
    assert_eq!(state.config.current_user(), Some("alice"));
}

#[test]
fn test_register_twice_is_fatal() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();

    let err = register(&mut state, &cmd("register", &["alice"])).unwrap_err();

    assert!(err.is_fatal());
    assert!(err.to_string().contains("already exists"));
    assert_eq!(state.repo.list_users().unwrap().len(), 1);
}

#[test]
fn test_register_config_write_failure_is_fatal() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let mut state = State::new(repo, ReadOnlyConfig, StubFetcher { feed: None });

    let err = register(&mut state, &cmd("register", &["alice"])).unwrap_err();

    assert!(err.is_fatal());
    assert!(err.to_string().contains("could not be set as current"));
    // The user row stays; a later login can select it
    assert_eq!(state.repo.list_users().unwrap().len(), 1);
}

#[test]
fn test_register_requires_one_arg() {
    let mut state = test_state();

    let err = register(&mut state, &cmd("register", &[])).unwrap_err();
    assert!(matches!(err, CommandError::Usage(_)));

    let err = register(&mut state, &cmd("register", &["a", "b"])).unwrap_err();
    assert!(matches!(err, CommandError::Usage(_)));
    assert!(state.repo.list_users().unwrap().is_empty());
}

#[test]
fn test_login_unknown_user_is_fatal_and_keeps_current() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();

    let err = login(&mut state, &cmd("login", &["ghost"])).unwrap_err();

    assert!(err.is_fatal());
    assert!(err.to_string().contains("please register"));
    assert_eq!(state.config.current_user(), Some("alice"));
}

#[test]
fn test_login_switches_current_user() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();
    register(&mut state, &cmd("register", &["bob"])).unwrap();
    assert_eq!(state.config.current_user(), Some("bob"));

    let outcome = login(&mut state, &cmd("login", &["alice"])).unwrap();

    assert_eq!(outcome, Outcome::Done("current user has been set to alice".into()));
    assert_eq!(state.config.current_user(), Some("alice"));
}

#[test]
fn test_users_empty_outcome() {
    let mut state = test_state();

    let outcome = users(&mut state, &cmd("users", &[])).unwrap();

    assert!(matches!(outcome, Outcome::Empty(_)));
}

#[test]
fn test_users_marks_current() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();
    register(&mut state, &cmd("register", &["bob"])).unwrap();

    let Outcome::Done(listing) = users(&mut state, &cmd("users", &[])).unwrap() else {
        panic!("expected a listing");
    };

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&"* alice"));
    assert!(lines.contains(&"* bob (current)"));
}

#[test]
fn test_reset_removes_users_and_feeds() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();
    add_feed(&mut state, &cmd("addfeed", &["Blog", "http://x/feed"])).unwrap();

    reset(&mut state, &cmd("reset", &[])).unwrap();

    assert!(state.repo.list_users().unwrap().is_empty());
    assert!(state.repo.list_feeds().unwrap().is_empty());
}

#[test]
fn test_add_feed_missing_arg_writes_nothing() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();

    let err = add_feed(&mut state, &cmd("addfeed", &["Blog"])).unwrap_err();

    assert!(matches!(err, CommandError::Usage(ref usage) if usage == "addfeed <name> <url>"));
    assert!(state.repo.list_feeds().unwrap().is_empty());
}

#[test]
fn test_add_feed_for_current_user() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();

    let outcome = add_feed(&mut state, &cmd("addfeed", &["Blog", "http://x/feed"])).unwrap();
    assert!(matches!(outcome, Outcome::Done(ref msg) if msg.contains("http://x/feed")));

    let feeds = state.repo.list_feeds().unwrap();
    assert_eq!(feeds.len(), 1);
    assert_eq!(feeds[0].name, "Blog");
    assert_eq!(feeds[0].user_name, "alice");
}

#[test]
fn test_add_feed_without_current_user_is_recoverable() {
    let mut state = test_state();

    let err = add_feed(&mut state, &cmd("addfeed", &["Blog", "http://x/feed"])).unwrap_err();

    assert!(matches!(err, CommandError::Storage(StorageError::NotFound(_))));
    assert!(!err.is_fatal());
}

#[test]
fn test_add_feed_current_user_deleted() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();
    reset(&mut state, &cmd("reset", &[])).unwrap();

    let err = add_feed(&mut state, &cmd("addfeed", &["Blog", "http://x/feed"])).unwrap_err();

    assert!(matches!(err, CommandError::Storage(StorageError::NotFound(ref what)) if what.contains("alice")));
}

#[test]
fn test_feeds_rejects_args() {
    let mut state = test_state();

    let err = feeds(&mut state, &cmd("feeds", &["extra"])).unwrap_err();

    assert!(err.is_fatal());
}

#[test]
fn test_feeds_lists_owner() {
    let mut state = test_state();
    register(&mut state, &cmd("register", &["alice"])).unwrap();
    add_feed(&mut state, &cmd("addfeed", &["Blog", "http://x/feed"])).unwrap();

    let outcome = feeds(&mut state, &cmd("feeds", &[])).unwrap();

    assert_eq!(outcome, Outcome::Done("* Blog <http://x/feed> added by alice".into()));
}

#[test]
fn test_feeds_empty_is_success() {
    let mut state = test_state();

    let outcome = feeds(&mut state, &cmd("feeds", &[])).unwrap();

    assert_eq!(outcome, Outcome::Done("No feeds found".into()));
}

#[test]
fn test_aggregate_renders_feed() {
    let feed = Feed {
        title: "A & B".into(),
        link: "https://example.com".into(),
        description: String::new(),
        items: vec![FeedItem {
            title: "X".into(),
            link: "u".into(),
            description: "d".into(),
            pub_date: "p".into(),
        }],
    };
    let mut state = state_with_fetcher(StubFetcher { feed: Some(feed.clone()) });

    let Outcome::Done(rendered) = aggregate(&mut state, &cmd("agg", &[])).unwrap() else {
        panic!("expected rendered feed");
    };

    let parsed: Feed = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, feed);
}

#[test]
fn test_aggregate_propagates_feed_error() {
    let mut state = test_state();

    let err = aggregate(&mut state, &cmd("agg", &[])).unwrap_err();

    assert!(matches!(err, CommandError::Feed(FeedError::Parse(_))));
    assert!(!err.is_fatal());
}
