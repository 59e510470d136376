use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "replog")]
#[command(about = "Personal rep tracker - log sets, keep streaks, unlock achievements")]
#[command(version)]
struct Cli {
    /// Path to the database file (defaults to ~/.replog/replog.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a completed set
    Log {
        /// Number of reps in the set
        count: u32,
    },

    /// Show totals, streaks and level progress
    Stats,

    /// List all achievements and their unlock state
    Achievements,

    /// Show the most recent entries
    Recent {
        /// How many entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let db = cli.db.as_deref();

    match cli.command {
        Commands::Log { count } => cli::log::log_command(db, count)?,
        Commands::Stats => cli::stats::stats_command(db)?,
        Commands::Achievements => cli::achievements::achievements_command(db)?,
        Commands::Recent { limit } => cli::recent::recent_command(db, limit)?,
    }

    Ok(())
}
