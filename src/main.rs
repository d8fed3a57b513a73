mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::cmd::release::{self, ReleaseCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::ticket::DEFAULT_TRACKER_CODE;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::jira::JiraClient;
use crate::infra::terminal::TerminalPrompt;

// `-h` is taken by `--head`, so the auto-generated help short flag is
// disabled and help stays long-only.
#[derive(Parser)]
#[command(
    name = "relnotes",
    author,
    version,
    about = "Generate release notes from the commits between two git refs",
    disable_help_flag = true
)]
struct Cli {
    /// Also render the report to a PDF file.
    #[arg(short, long)]
    pdf: bool,
    /// Also copy the markdown body to the system clipboard.
    #[arg(short, long)]
    clipboard: bool,
    /// Head ref of the release range.
    #[arg(short = 'h', long, default_value = "origin/master")]
    head: String,
    /// Base ref of the release range.
    #[arg(short = 'b', long, default_value = "origin/live")]
    base: String,
    /// Comma-separated recipients; enables the email sink.
    #[arg(long)]
    email_to: Option<String>,
    /// Subject line for the emailed report.
    #[arg(long)]
    email_subject: Option<String>,
    /// Repository display name override.
    #[arg(long)]
    app_name: Option<String>,
    /// Ticket prefix matched in commit subjects.
    #[arg(long, default_value = DEFAULT_TRACKER_CODE)]
    jira_code: String,
    /// Print help.
    #[arg(long, action = ArgAction::Help, value_parser = clap::value_parser!(bool))]
    help: Option<bool>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relnotes=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd);

    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let issue_tracker = Arc::new(JiraClient::for_host(&config.jira_host));
    let prompt = Arc::new(TerminalPrompt::new());

    let context = AppContext::new(config, git, issue_tracker, prompt);

    release::run(
        &context,
        ReleaseCommandArgs {
            base: cli.base,
            head: cli.head,
            tracker_code: cli.jira_code,
            app_name: cli.app_name,
            pdf: cli.pdf,
            clipboard: cli.clipboard,
            email_to: cli.email_to,
            email_subject: cli.email_subject,
        },
    )
    .await
}
