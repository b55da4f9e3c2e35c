use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Compose a task inside a sprint and save it
    Save {
        /// Sprint ID the task belongs to
        #[arg(long)]
        sprint_id: String,

        /// Sprint end date as rendered by the server
        #[arg(long)]
        sprint_end: String,

        /// Task title
        #[arg(long)]
        title: String,

        /// Due date (YYYY-MM-DD, between today and the sprint end)
        #[arg(long)]
        due: String,

        /// Task status
        #[arg(
            long,
            default_value = "to-do",
            value_parser = ["to-do", "in-progress", "blocked", "completed"]
        )]
        status: String,

        /// Participant user ID (repeatable)
        #[arg(long = "participant")]
        participants: Vec<String>,

        /// JSON file with the participant suggestion list
        #[arg(long, conflicts_with = "project_id")]
        users: Option<PathBuf>,

        /// Project whose participants are fetched from the server
        #[arg(long)]
        project_id: Option<String>,
    },
}
