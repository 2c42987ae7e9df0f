use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use happyhour_core::AppConfig;
use happyhour_yelp::{normalize_businesses, SearchQuery, YelpClient};
use tracing_subscriber::EnvFilter;


#[derive(Debug, Parser)]
#[command(name = "happyhour")]
#[command(about = "Search Yelp for happy hour businesses and save them as JSON")]
struct Cli {
    /// Yelp Fusion API key (falls back to `YELP_API_KEY`)
    #[arg(long)]
    api_key: Option<String>,

    /// Latitude of the center point
    #[arg(long, allow_negative_numbers = true)]
    latitude: f64,

    /// Longitude of the center point
    #[arg(long, allow_negative_numbers = true)]
    longitude: f64,

    /// Search radius in miles (the API caps this at 25)
    #[arg(long, default_value_t = 25)]
    radius: u32,

    /// Search term
    #[arg(long, default_value = "happy hour")]
    term: String,

    /// Output filename (defaults to a timestamped name)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Results per request, 1 to 50
    #[arg(long, default_value_t = 50)]
    page_size: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = happyhour_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "loaded configuration");

    run(cli, &config).await
}

async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let api_key = resolve_api_key(cli.api_key.as_deref(), config)?;

    let client = YelpClient::with_base_url(
        api_key,
        &config.yelp_base_url,
        &config.user_agent,
    )
    .context("failed to build Yelp client")?;

    let query = SearchQuery::new(&cli.term, cli.latitude, cli.longitude, cli.radius)
        .with_page_size(cli.page_size);

    println!(
        "Searching for '{}' businesses within {} miles...",
        cli.term, cli.radius
    );
    let businesses = client
        .search_all(&query)
        .await
        .context("Yelp search failed")?;
    println!("Found {} businesses", businesses.len());

    let records = normalize_businesses(&businesses);
    let path = happyhour_core::write_json_records(&records, cli.output.as_deref())
        .context("failed to save business information")?;
    println!("Business information saved to {}", path.display());

    Ok(())
}

/// The `--api-key` flag wins over `YELP_API_KEY`; one of them must be set.
fn resolve_api_key<'a>(flag: Option<&'a str>, config: &'a AppConfig) -> anyhow::Result<&'a str> {
    flag.filter(|k| !k.is_empty())
        .or(config.yelp_api_key.as_deref())
        .ok_or_else(|| anyhow::anyhow!("an API key is required: pass --api-key or set YELP_API_KEY"))
}
