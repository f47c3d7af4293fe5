mod reviews;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pharmafind_core::SortMode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pharmafind")]
#[command(about = "Find nearby pharmacies ranked by rating, review sentiment and distance")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for pharmacies around a point and rank them
    Search {
        /// Latitude of the search centre (defaults to `PHARMAFIND_DEFAULT_LAT`)
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude of the search centre (defaults to `PHARMAFIND_DEFAULT_LNG`)
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Search radius in kilometres; capped at the configured maximum
        #[arg(long)]
        radius: Option<f64>,
        /// Result order: `nearest` or `top-rated`
        #[arg(long, default_value = "nearest")]
        sort: SortMode,
        /// Maximum number of places to request from the provider
        #[arg(long)]
        limit: Option<usize>,
        /// Skip fetching ratings and reviews; list search hits by distance only
        #[arg(long)]
        no_enrich: bool,
        /// Print the ranked places as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Analyze a JSON file of reviews (`[{"text": .., "rating": ..}, ..]`)
    Analyze {
        /// Path to the reviews file
        #[arg(long)]
        file: PathBuf,
        /// Minimum number of reviews before the analysis counts as meaningful
        #[arg(long)]
        min_reviews: Option<usize>,
    },
    /// Score a single piece of review text against the sentiment lexicon
    Score {
        /// Text to score
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = pharmafind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Some(Commands::Search {
            lat,
            lng,
            radius,
            sort,
            limit,
            no_enrich,
            json,
        }) => {
            let options = search::SearchOptions {
                center: lat.zip(lng),
                radius_km: radius,
                sort,
                limit,
                enrich: !no_enrich,
                json,
            };
            search::run_search(&config, &options).await?;
        }
        Some(Commands::Analyze { file, min_reviews }) => {
            let min_reviews = min_reviews.unwrap_or(config.min_reviews_for_analysis);
            reviews::run_analyze(&file, min_reviews)?;
        }
        Some(Commands::Score { text }) => reviews::run_score(&text),
        None => println!("pharmafind ready; run `pharmafind --help` for commands"),
    }

    Ok(())
}
