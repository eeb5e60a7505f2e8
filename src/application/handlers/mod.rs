//! Command handlers - one per user-facing verb
//!
//! Each handler takes the shared state and the parsed command and performs one
//! unit of work against the repository, the config store or the feed source.

mod users;
mod feeds;

#[cfg(test)]
pub(crate) mod tests;

pub use users::{register, login, reset, users};
pub use feeds::{add_feed, feeds, aggregate, AGG_FEED_URL};

use super::errors::CommandError;
use crate::domain::entities::Command;

/// Fails with a usage error unless exactly `count` arguments were given
fn expect_args(cmd: &Command, count: usize, usage: &str) -> Result<(), CommandError> {
    if cmd.args.len() != count {
        tracing::debug!(
            "{} expects {} args, got {}",
            cmd.name,
            count,
            cmd.args.len()
        );
        return Err(CommandError::Usage(usage.to_string()));
    }
    Ok(())
}
