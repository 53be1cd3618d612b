//! consultsim CLI
//!
//! Regenerates the derived tables of a simulated consulting database:
//! - `title-history`: promotion chains into `Consultant_Title_History`
//! - `progress`: monthly completion into `Deliverable_Progress_Month`
//! - `all`: both, title history first

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use consultsim_core::config::{CliOverrides, ConsultsimConfig};
use consultsim_core::errors::{ErrorCode, SynthError};
use consultsim_storage::EntityStore;
use consultsim_synth::{run_progress_months, run_title_history, PassKind, RunSummary};

#[derive(Parser)]
#[command(name = "consultsim")]
#[command(author, version, about = "Post-process a simulated consulting database")]
struct Cli {
    /// Directory holding `consultsim.toml`.
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Database path. Overrides `CONSULTING_DB_PATH` and the config file.
    #[arg(long, global = true)]
    db: Option<String>,

    /// Print summaries as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate consultant title histories.
    TitleHistory {
        /// Seed for the random stream.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Regenerate monthly deliverable progress.
    Progress {
        /// Report the final month as 100% complete.
        #[arg(long)]
        complete_final_month: bool,
    },

    /// Run both passes.
    All {
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        complete_final_month: bool,
    },
}

impl Commands {
    fn overrides(&self, db_path: Option<String>) -> CliOverrides {
        let (seed, complete) = match self {
            Self::TitleHistory { seed } => (*seed, false),
            Self::Progress {
                complete_final_month,
            } => (None, *complete_final_month),
            Self::All {
                seed,
                complete_final_month,
            } => (*seed, *complete_final_month),
        };
        CliOverrides {
            db_path,
            seed,
            // Only an explicit flag overrides env/file settings.
            complete_final_month: complete.then_some(true),
        }
    }

    fn passes(&self) -> &'static [PassKind] {
        match self {
            Self::TitleHistory { .. } => &[PassKind::TitleHistory],
            Self::Progress { .. } => &[PassKind::Progress],
            Self::All { .. } => &[PassKind::TitleHistory, PassKind::Progress],
        }
    }
}

fn main() -> ExitCode {
    consultsim_core::tracing::init_tracing();
    let cli = Cli::parse();

    let overrides = cli.command.overrides(cli.db.clone());
    let config = match ConsultsimConfig::load(&cli.config, Some(&overrides)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for &kind in cli.command.passes() {
        let result = run_pass(&config, kind);
        report(kind, &result, cli.json);
        failed |= result.is_err();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_pass(config: &ConsultsimConfig, kind: PassKind) -> Result<RunSummary, SynthError> {
    let db_path = config.store.effective_db_path();
    tracing::debug!(db = %db_path.display(), ?kind, "opening store");
    let store = EntityStore::open(&db_path)?;
    match kind {
        PassKind::TitleHistory => run_title_history(&store, &config.title_history),
        PassKind::Progress => run_progress_months(&store, &config.progress),
    }
}

fn report(kind: PassKind, result: &Result<RunSummary, SynthError>, json: bool) {
    match result {
        Ok(summary) if json => match serde_json::to_string_pretty(summary) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: failed to serialize summary: {e}"),
        },
        Ok(summary) => {
            println!("{summary}");
            println!("{}", summary.status_line());
        }
        Err(e) => {
            eprintln!("Error: {}", e.coded_string());
            println!("{} generation failed.", kind.label());
        }
    }
}
