use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List participants whose name or username contains QUERY
    Search {
        /// Case-insensitive search text
        query: String,

        /// JSON file with the participant suggestion list
        #[arg(long, conflicts_with = "project_id")]
        users: Option<PathBuf>,

        /// Project whose participants are fetched from the server
        #[arg(long)]
        project_id: Option<String>,
    },
}
