use anyhow::Result;
use catalog::DEFAULT_CATALOG_URL;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Published CSV to load
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    url: String,

    /// Keep games whose name, developer or category contains this text
    #[arg(long, short, default_value = "")]
    query: String,

    /// Only the first three games
    #[arg(long)]
    featured: bool,

    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    process::fetch_games(&args.url, &args.query, args.featured, args.json).await
}
