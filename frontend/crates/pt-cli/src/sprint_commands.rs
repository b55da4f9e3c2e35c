use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum SprintCommands {
    /// Validate a new sprint and save it
    Create {
        /// Sprint name (3-30 letters, digits, or spaces)
        #[arg(long)]
        name: String,

        /// Start date (YYYY-MM-DD, today or later)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD, after the start date)
        #[arg(long)]
        end: String,

        /// Sprint check/save URL (overrides endpoints.sprint_url)
        #[arg(long)]
        project_url: Option<String>,
    },
}
