//! pt - project tracker sprint and task composer
//!
//! # Examples
//!
//! ```bash
//! # Create a sprint
//! pt sprint create --name "Sprint 12" --start 2025-01-06 --end 2025-01-20 \
//!     --project-url /project/1/sprint/save/
//!
//! # Save a task with two participants
//! pt task save --sprint-id 12 --sprint-end 2025-01-20 --title "Write spec" \
//!     --due 2025-01-10 --participant 3 --participant 7 --project-id 1
//!
//! # Look up participants
//! pt users search ada --users users.json --pretty
//! ```

use pt_cli::commands::Commands;
use pt_cli::sprint_commands::SprintCommands;
use pt_cli::task_commands::TaskCommands;
use pt_cli::user_commands::UserCommands;
use pt_cli::{
    Cli, CliResult, CommandReport, Session, SprintRequest, TaskRequest, TerminalFeedback,
    UserSource, logger, resolve_csrf_token,
};
use pt_client::ReqwestTransport;
use pt_config::Config;
use pt_core::{SystemClock, TaskStatus};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let pretty = cli.pretty;
    let feedback = TerminalFeedback::new();

    match run(cli, &config, &feedback).await {
        Ok(report) => match render(&report.value, pretty) {
            Ok(json) => {
                println!("{json}");
                if report.success {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("Command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

async fn run(
    cli: Cli,
    config: &Config,
    feedback: &TerminalFeedback,
) -> CliResult<CommandReport> {
    let base_url = cli.server.unwrap_or_else(|| config.server.base_url.clone());
    let csrf_token = resolve_csrf_token(
        cli.csrf_token.as_deref(),
        &config.csrf,
        cli.cookie.as_deref(),
    );

    let session = Session::new(
        ReqwestTransport::new(&base_url, csrf_token),
        Arc::new(SystemClock),
    )
    .with_sprint_url(config.endpoints.sprint_url.clone());
    let default_project = config.endpoints.project_id.as_deref();

    match cli.command {
        Commands::Sprint { action } => match action {
            SprintCommands::Create {
                name,
                start,
                end,
                project_url,
            } => {
                let request = SprintRequest {
                    name,
                    start,
                    end,
                    sprint_url: project_url,
                };
                session.create_sprint(request, feedback).await
            }
        },

        Commands::Task { action } => match action {
            TaskCommands::Save {
                sprint_id,
                sprint_end,
                title,
                due,
                status,
                participants,
                users,
                project_id,
            } => {
                let request = TaskRequest {
                    sprint_id,
                    sprint_end,
                    title,
                    due,
                    status: status.parse::<TaskStatus>()?,
                    participants,
                    users: UserSource::resolve(users, project_id, default_project),
                };
                session.save_task(request, feedback).await
            }
        },

        Commands::Users { action } => match action {
            UserCommands::Search {
                query,
                users,
                project_id,
            } => {
                let source = UserSource::resolve(users, project_id, default_project);
                let matches = session.search_users(&query, &source).await?;
                Ok(CommandReport {
                    value: serde_json::to_value(matches)?,
                    success: true,
                })
            }
        },
    }
}

fn render(value: &serde_json::Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
