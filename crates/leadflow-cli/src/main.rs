mod cmd;
mod output;
mod root;

use clap::{CommandFactory, Parser, Subcommand};
use cmd::tag::TagSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "leadflow",
    about = "CRM automation helper — lead scoring, pipeline transitions, and follow-up reminders",
    version,
    propagate_version = true
)]
struct Cli {
    /// CRM workspace root (default: auto-detect from crm.yaml or the data file)
    #[arg(long, global = true, env = "LEADFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check for overdue follow-ups and send an alert if any are found
    CheckOverdue,

    /// Recompute lead scores and persist significant changes
    UpdateScores,

    /// Apply automated pipeline-stage transitions
    PipelineAutomation,

    /// Build and send the weekly activity report
    WeeklyReport,

    /// Run overdue check, score update, and pipeline pass in one go
    FullAutomation {
        /// Don't contact the external messenger; just report what would happen
        #[arg(long)]
        dry_run: bool,
    },

    /// List prospects with computed scores, highest first
    List,

    /// Show one prospect with its overlay state
    Show { company: String },

    /// Print the score breakdown for one prospect
    Score { company: String },

    /// Set the pipeline status for a company
    Status {
        company: String,
        /// One of: new, cold, warm, hot
        status: String,
    },

    /// Add or remove priority tags on a company
    Tag {
        #[command(subcommand)]
        subcommand: TagSubcommand,
    },

    /// Schedule a follow-up and register its reminder
    Followup {
        company: String,
        /// Follow-up kind: call, email, meeting, site_visit
        #[arg(long)]
        kind: String,
        /// When the follow-up is due (RFC 3339 or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        at: String,
        #[arg(long)]
        notes: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let Some(command) = cli.command else {
        // Bare invocation prints usage and is not an error.
        let _ = Cli::command().print_help();
        return;
    };

    let root = root::resolve_root(cli.root.as_deref());

    let result = match command {
        Commands::CheckOverdue => cmd::overdue::run(&root, cli.json),
        Commands::UpdateScores => cmd::scores::run(&root, cli.json),
        Commands::PipelineAutomation => cmd::pipeline::run(&root, cli.json),
        Commands::WeeklyReport => cmd::report::run(&root, cli.json),
        Commands::FullAutomation { dry_run } => cmd::run::run(&root, dry_run, cli.json),
        Commands::List => cmd::prospect::list(&root, cli.json),
        Commands::Show { company } => cmd::prospect::show(&root, &company, cli.json),
        Commands::Score { company } => cmd::prospect::score(&root, &company, cli.json),
        Commands::Status { company, status } => cmd::status::run(&root, &company, &status),
        Commands::Tag { subcommand } => cmd::tag::run(&root, subcommand),
        Commands::Followup {
            company,
            kind,
            at,
            notes,
        } => cmd::followup::run(&root, &company, &kind, &at, notes),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
