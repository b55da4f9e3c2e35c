use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pt")]
#[command(about = "Compose and submit sprints and tasks to the project tracker")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server base URL (overrides server.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Raw Cookie header to read the CSRF token from
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    /// CSRF token (overrides csrf.token and --cookie)
    #[arg(long, global = true)]
    pub csrf_token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
