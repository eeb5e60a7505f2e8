//! Command registry - maps command names to handlers

use std::collections::HashMap;

use super::errors::CommandError;
use super::state::State;
use crate::domain::entities::Command;

/// What a handler produced when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Finished normally, with text for the user
    Done(String),
    /// Nothing to show; the caller decides how to surface it
    Empty(String),
}

/// Handler result
pub type HandlerResult = Result<Outcome, CommandError>;

/// Exit status when no command was given
pub const USAGE_EXIT_STATUS: u8 = 1;

/// Process exit status for a dispatch result: 0 only for `Outcome::Done`
pub fn exit_status(result: &HandlerResult) -> u8 {
    match result {
        Ok(Outcome::Done(_)) => 0,
        Ok(Outcome::Empty(_)) | Err(_) => 1,
    }
}

/// Handler function type
pub type Handler = Box<dyn Fn(&mut State, &Command) -> HandlerResult>;

/// Name to handler mapping
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command bound
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Binds `handler` to `name` unless the name is already taken.
    ///
    /// A second registration under the same name is silently ignored and the first
    /// handler stays active. This is probably unintended but callers may rely on it.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut State, &Command) -> HandlerResult + 'static,
    {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            tracing::debug!("Command {} already registered, keeping the first handler", name);
            return;
        }
        self.handlers.insert(name, Box::new(handler));
    }

    pub fn register_defaults(&mut self) {
        use super::handlers;

        self.register("register", handlers::register);
        self.register("login", handlers::login);
        self.register("users", handlers::users);
        self.register("reset", handlers::reset);
        self.register("feeds", handlers::feeds);
        self.register("addfeed", handlers::add_feed);
        self.register("agg", handlers::aggregate);
    }

    /// Dispatch `command` to its handler and return whatever it returns
    pub fn run(&self, state: &mut State, command: &Command) -> HandlerResult {
        let handler = self
            .handlers
            .get(&command.name)
            .ok_or_else(|| CommandError::NotFound(command.name.clone()))?;

        tracing::debug!("Dispatching {} with {} args", command.name, command.args.len());
        handler(state, command)
    }

    /// Usage text listing every registered command
    pub fn usage(&self) -> String {
        format!(
            "Usage: gator <command> [args...]\nCommands: {}",
            self.names().join(", ")
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
