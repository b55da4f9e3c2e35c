//! pt-cli library
//!
//! Command definitions and the session that drives the composers, exported
//! for the `pt` binary and its tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod feedback;
pub mod logger;
pub mod session;
pub mod sprint_commands;
pub mod task_commands;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use feedback::TerminalFeedback;
pub use session::{
    CommandReport, Session, SprintRequest, TaskRequest, UserSource, resolve_csrf_token,
};
