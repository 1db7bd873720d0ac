//! OpenDesk CLI
//!
//! Command-line interface for the OpenDesk ticket assignment engine.
//!
//! # Usage
//!
//! ```bash
//! opendesk assign --input dataset.json --output result.json
//! opendesk assign -i dataset.json -o result.json --classifier similarity
//! opendesk validate -i dataset.json
//! ```

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use desk_assign::{AgentRegistry, AllocationEngine};
use desk_classify::ClassifierKind;
use desk_common::{Agent, DeskResult, Ticket};
use desk_report::Analytics;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

mod config;
mod model;
mod output;

use config::CliConfig;
use model::{InputDoc, Metadata, OutputDoc};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "opendesk")]
#[command(version = "0.1.0")]
#[command(about = "OpenDesk ticket assignment engine", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short, env = "OPENDESK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one batch allocation over a dataset file
    Assign {
        /// Input dataset JSON
        #[arg(long, short)]
        input: PathBuf,
        /// Result JSON path
        #[arg(long, short, default_value = "result.json")]
        output: PathBuf,
        /// Override the configured classifier variant
        #[arg(long, value_enum)]
        classifier: Option<ClassifierArg>,
        /// Console output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Check a dataset file without assigning anything
    Validate {
        /// Input dataset JSON
        #[arg(long, short)]
        input: PathBuf,
    },
}

/// Mirror of [`ClassifierKind`] carrying the clap derive
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassifierArg {
    Keyword,
    Similarity,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Keyword => Self::Keyword,
            ClassifierArg::Similarity => Self::Similarity,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> DeskResult<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Assign {
            input,
            output,
            classifier,
            format,
        } => assign(config, input, output, classifier, format),
        Commands::Validate { input } => validate(config, input),
    }
}

fn load_batch(
    config: &CliConfig,
    input: &Path,
    kind: ClassifierKind,
) -> DeskResult<(Vec<Agent>, Vec<Ticket>)> {
    let doc: InputDoc = serde_json::from_str(&fs::read_to_string(input)?)?;
    let classifier = desk_classify::build(kind);

    let agents = doc
        .agents
        .into_iter()
        .map(|r| {
            r.into_agent(
                config.default_max_concurrent,
                config.engine.max_concurrent_override,
            )
        })
        .collect::<DeskResult<Vec<_>>>()?;
    let tickets = doc
        .tickets
        .into_iter()
        .map(|r| r.into_ticket(classifier.as_ref()))
        .collect::<DeskResult<Vec<_>>>()?;

    info!(
        agents = agents.len(),
        tickets = tickets.len(),
        "loaded dataset"
    );
    Ok((agents, tickets))
}

fn assign(
    config: CliConfig,
    input: PathBuf,
    output: PathBuf,
    classifier: Option<ClassifierArg>,
    format: OutputFormat,
) -> DeskResult<()> {
    let kind = classifier.map(Into::into).unwrap_or(config.classifier);
    let (agents, tickets) = load_batch(&config, &input, kind)?;

    let registry = AgentRegistry::new(agents)?;
    let engine = AllocationEngine::new(registry, config.engine.clone())?;
    let outcome = engine.run(&tickets)?;

    let snapshot = engine.registry().snapshot();
    let analytics = Analytics::from_run(&outcome, &snapshot, &tickets);

    let doc = OutputDoc {
        metadata: Metadata {
            generated_at: Utc::now(),
            total_tickets: tickets.len(),
            total_agents: snapshot.len(),
            assigned: outcome.assigned_count(),
            unassigned: outcome.unassigned_count(),
        },
        assignments: outcome.assignments,
        analytics: analytics.clone(),
    };
    fs::write(&output, serde_json::to_string_pretty(&doc)?)?;
    info!(path = %output.display(), "results written");

    format.print(&analytics);
    Ok(())
}

fn validate(config: CliConfig, input: PathBuf) -> DeskResult<()> {
    let (agents, tickets) = load_batch(&config, &input, config.classifier)?;
    let agent_count = agents.len();
    // Registry construction applies every boundary check the engine relies on
    AgentRegistry::new(agents)?;
    for ticket in &tickets {
        ticket.validate()?;
    }
    println!(
        "dataset valid: {} agents, {} tickets",
        agent_count,
        tickets.len()
    );
    Ok(())
}
