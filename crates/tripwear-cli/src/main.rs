mod closet;
mod outfits;
mod prompt;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tripwear-cli")]
#[command(about = "Travel outfit recommendation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a generated recommendation into day-by-day outfit records (JSON)
    Parse {
        /// File containing the generated text; reads stdin when omitted
        file: Option<PathBuf>,
        /// Gender prefixed to shopping queries (defaults to `TRIPWEAR_DEFAULT_GENDER`)
        #[arg(long)]
        gender: Option<String>,
        /// Emit the per-day shopping search plan instead of the raw records
        #[arg(long)]
        plan: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// File shopping results (a JSON array) as closet items, dropping
    /// results that are not purchasable
    Closet {
        /// File containing the results; reads stdin when omitted
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the closet category for one or more product titles
    Categorize {
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Build the stylist prompt for a trip
    Prompt {
        #[arg(long)]
        city: String,
        #[arg(long)]
        region: String,
        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the trip (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        /// Planned activity; repeat for several
        #[arg(long = "activity")]
        activities: Vec<String>,
        /// Forecast summary to include
        #[arg(long)]
        weather: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = tripwear_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse {
            file,
            gender,
            plan,
            pretty,
        } => outfits::run_parse(&config, file.as_deref(), gender.as_deref(), plan, pretty),
        Commands::Closet { file, pretty } => closet::run_closet(&config, file.as_deref(), pretty),
        Commands::Categorize { titles } => {
            for title in &titles {
                println!("{title}\t{}", tripwear_core::categorize_title(title));
            }
            Ok(())
        }
        Commands::Prompt {
            city,
            region,
            start,
            end,
            gender,
            age,
            activities,
            weather,
        } => prompt::run_prompt(tripwear_core::TripProfile {
            city,
            region,
            gender,
            age,
            activities,
            start_date: start,
            end_date: end,
            weather_summary: weather,
        }),
    }
}

#[cfg(test)]
mod tests;
