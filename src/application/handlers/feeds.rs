use super::expect_args;
use crate::application::errors::{CommandError, StorageError};
use crate::application::registry::{HandlerResult, Outcome};
use crate::application::state::State;
use crate::domain::entities::{Command, CreateFeedParams};

/// The single feed `agg` pulls
pub const AGG_FEED_URL: &str = "https://www.wagslane.dev/index.xml";

const ADDFEED_USAGE: &str = "addfeed <name> <url>";
const FEEDS_USAGE: &str = "feeds";

/// Track a new feed for the current user
pub fn add_feed(state: &mut State, cmd: &Command) -> HandlerResult {
    expect_args(cmd, 2, ADDFEED_USAGE)?;

    let Some(current) = state.config.current_user() else {
        return Err(StorageError::NotFound("no current user, login first".to_string()).into());
    };
    let user = state
        .repo
        .get_user(current)?
        .ok_or_else(|| StorageError::NotFound(format!("user {}", current)))?;

    let feed = state
        .repo
        .create_feed(CreateFeedParams::new(cmd.args[0].as_str(), cmd.args[1].as_str(), user.id))?;

    tracing::info!("Feed {} added for {}", feed.name, user.name);
    Ok(Outcome::Done(feed.to_string()))
}

/// List every tracked feed with its owner
pub fn feeds(state: &mut State, cmd: &Command) -> HandlerResult {
    expect_args(cmd, 0, FEEDS_USAGE)?;

    let feeds = state.repo.list_feeds()?;
    if feeds.is_empty() {
        return Ok(Outcome::Done("No feeds found".to_string()));
    }

    let lines: Vec<String> = feeds.iter().map(|feed| format!("* {}", feed)).collect();
    Ok(Outcome::Done(lines.join("\n")))
}

/// One-shot fetch of the fixed feed, printed as JSON
pub fn aggregate(state: &mut State, _cmd: &Command) -> HandlerResult {
    tracing::info!("Fetching {}", AGG_FEED_URL);
    let feed = state.fetcher.fetch(AGG_FEED_URL)?;

    let rendered = serde_json::to_string_pretty(&feed)
        .map_err(|e| CommandError::Fatal(format!("failed to render feed: {}", e)))?;
    Ok(Outcome::Done(rendered))
}
