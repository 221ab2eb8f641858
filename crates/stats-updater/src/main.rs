//! Topmate stats updater
//!
//! Regenerates `assets/data/topmate_stats.json`, which the site polls for
//! its booking counters. Meant to run on a schedule (CI cron).

mod fetch;
mod output;
mod scrape;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PROFILE_URL: &str = "https://topmate.io/tharun_polu";
const DEFAULT_OUTPUT: &str = "assets/data/topmate_stats.json";

#[derive(Parser)]
#[command(name = "stats-updater")]
#[command(about = "Scrape the Topmate profile and write the static stats file")]
struct Cli {
    /// Profile page to scrape
    #[arg(long, env = "TOPMATE_URL", default_value = DEFAULT_PROFILE_URL)]
    url: String,

    /// Stats file to write
    #[arg(short, long, env = "TOPMATE_STATS_PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "stats_updater=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let client = fetch::build_client(Duration::from_secs(cli.timeout))?;
    let stats = fetch::fetch_stats(&client, &cli.url, chrono::Utc::now()).await;
    output::write_stats(&cli.output, &stats)?;

    tracing::info!(
        path = %cli.output.display(),
        bookings = stats.bookings,
        reviews = stats.reviews,
        rating = stats.rating,
        "stats updated"
    );
    Ok(())
}
