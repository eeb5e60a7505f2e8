//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Registry: Command name to handler dispatch
//! - Handlers: One handler per CLI verb
//! - State: Shared state passed to handlers
//! - Errors: Domain-specific errors

pub mod errors;
pub mod state;
pub mod registry;
pub mod handlers;

pub use registry::{exit_status, CommandRegistry, Handler, HandlerResult, Outcome, USAGE_EXIT_STATUS};
pub use state::State;
