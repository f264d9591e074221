use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

use fitrisk::config::AppConfig;
use fitrisk::error::FitriskError;
use fitrisk::import::import_activities;
use fitrisk::load::{assess_history, LoadWindows};
use fitrisk::logging::{init_logging, LogLevel};
use fitrisk::models::WellnessEntry;
use fitrisk::report::{
    render_activity_table, render_risk_banner, render_subrisk_table, TrainingSummary,
};

/// fitrisk - Injury Risk & Training Load CLI
///
/// Estimates musculoskeletal injury risk from workout history using the
/// acute:chronic workload ratio combined with sleep and soreness signals.
#[derive(Parser)]
#[command(name = "fitrisk")]
#[command(version = "0.1.0")]
#[command(about = "Injury risk and training load analysis", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess injury risk from workout history and wellness signals
    Assess {
        /// Workout history file (CSV or JSON)
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Hours slept last night
        #[arg(short, long)]
        sleep: Decimal,

        /// Muscular soreness, 0 (none) to 10 (severe)
        #[arg(short = 'r', long)]
        soreness: Decimal,

        /// Override the acute window (sessions)
        #[arg(long)]
        recent: Option<usize>,

        /// Override the chronic window (sessions)
        #[arg(long)]
        chronic: Option<usize>,
    },

    /// Show a training summary from workout history
    Summary {
        /// Workout history file (CSV or JSON)
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Number of recent sessions to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let mut config = AppConfig::load(&config_path)?;

    if cli.verbose > 0 {
        config.log.level = LogLevel::from_verbosity(cli.verbose);
    }
    init_logging(&config.log)?;

    match cli.command {
        Commands::Assess {
            file,
            sleep,
            soreness,
            recent,
            chronic,
        } => {
            let activities = import_activities(&file)
                .with_context(|| format!("failed to import history from {}", file.display()))?;
            for activity in &activities {
                activity.validate()?;
            }
            info!(sessions = activities.len(), "imported workout history");

            let mut windows = config.windows;
            if let Some(recent) = recent {
                windows.recent_sessions = recent;
            }
            if let Some(chronic) = chronic {
                windows.chronic_sessions = chronic;
            }

            let wellness = WellnessEntry::new(sleep, soreness);
            match assess_history(&activities, wellness, windows) {
                Ok(assessment) => {
                    println!("{}", render_risk_banner(&assessment));
                    println!();
                    println!("{}", render_subrisk_table(&assessment));
                }
                Err(err) => {
                    let err = FitriskError::from(err);
                    eprintln!("{}", err.user_message().yellow());
                    std::process::exit(1);
                }
            }
        }

        Commands::Summary { file, limit } => {
            let mut activities = import_activities(&file)
                .with_context(|| format!("failed to import history from {}", file.display()))?;
            activities.sort_by(|a, b| b.date.cmp(&a.date));

            let summary = TrainingSummary::from_activities(&activities);
            println!("{}", "TRAINING SUMMARY".bold());
            println!(
                "  Sessions: {}   Calories: {}   Minutes: {}",
                summary.session_count, summary.total_calories, summary.total_minutes
            );
            println!(
                "  Intensity trend (oldest first): {:?}",
                summary.intensity_trend
            );
            println!();
            println!("{}", render_activity_table(&activities, limit));
        }
    }

    Ok(())
}
