use super::expect_args;
use crate::application::errors::CommandError;
use crate::application::registry::{HandlerResult, Outcome};
use crate::application::state::State;
use crate::domain::entities::{Command, CreateUserParams};

const REGISTER_USAGE: &str = "register <username>";
const LOGIN_USAGE: &str = "login <username>";

/// Create a user and make it the current one
pub fn register(state: &mut State, cmd: &Command) -> HandlerResult {
    expect_args(cmd, 1, REGISTER_USAGE)?;
    let name = &cmd.args[0];

    match state.repo.get_user(name) {
        Ok(None) => {}
        Ok(Some(existing)) => {
            return Err(CommandError::Fatal(format!("user already exists: {}", existing.name)));
        }
        Err(e) => return Err(CommandError::Fatal(format!("error checking user: {}", e))),
    }

    let user = state
        .repo
        .create_user(CreateUserParams::new(name.as_str()))
        .map_err(|e| CommandError::Fatal(format!("failed to create user: {}", e)))?;
    state.config.set_current_user(&user.name).map_err(|e| {
        CommandError::Fatal(format!(
            "user {} was created but could not be set as current: {}",
            user.name, e
        ))
    })?;

    tracing::info!("Registered user {} ({})", user.name, user.id);
    Ok(Outcome::Done(format!("user was created successfully: {}", user)))
}

/// Switch the current user to an existing one
pub fn login(state: &mut State, cmd: &Command) -> HandlerResult {
    expect_args(cmd, 1, LOGIN_USAGE)?;
    let name = &cmd.args[0];

    let Some(user) = state.repo.get_user(name)? else {
        return Err(CommandError::Fatal(
            "user does not exist, please register first".to_string(),
        ));
    };

    state.config.set_current_user(&user.name)?;
    Ok(Outcome::Done(format!("current user has been set to {}", user.name)))
}

/// Remove every user (their feeds go with them)
pub fn reset(state: &mut State, _cmd: &Command) -> HandlerResult {
    state
        .repo
        .delete_all_users()
        .map_err(|e| CommandError::Fatal(format!("error deleting users: {}", e)))?;

    tracing::info!("Users table reset");
    Ok(Outcome::Done("users table has been reset successfully".to_string()))
}

/// List users, marking the current one
pub fn users(state: &mut State, _cmd: &Command) -> HandlerResult {
    let users = state
        .repo
        .list_users()
        .map_err(|e| CommandError::Fatal(format!("error getting users: {}", e)))?;

    if users.is_empty() {
        return Ok(Outcome::Empty("No users found".to_string()));
    }

    let current = state.config.current_user();
    let lines: Vec<String> = users
        .iter()
        .map(|user| {
            if current == Some(user.name.as_str()) {
                format!("* {} (current)", user.name)
            } else {
                format!("* {}", user.name)
            }
        })
        .collect();

    Ok(Outcome::Done(lines.join("\n")))
}
