use crate::{
    sprint_commands::SprintCommands, task_commands::TaskCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Participant lookups
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}
