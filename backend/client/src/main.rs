use anyhow::Context;
use clap::Parser;
use planets_client::{PlanetFeed, Selection, render};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the planets proxy
    #[arg(long, env = "PLANETS_URL", default_value = "http://localhost:1111")]
    url: String,

    /// Stop after this many pages, loads everything by default
    #[arg(long)]
    pages: Option<usize>,

    /// Rows to mark as selected, 1-based, e.g. `--select 1,3`
    #[arg(long, value_delimiter = ',')]
    select: Vec<usize>,

    #[arg(long, conflicts_with = "select")]
    select_all: bool,

    /// Print the normalized planets as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut feed = PlanetFeed::new(Client::new(), &args.url);
    feed.load_all(args.pages)
        .await
        .context("Could not load the planets, try again later")?;

    let planets = feed.planets();
    info!("Loaded {} planets over {} pages", planets.len(), feed.pages_loaded());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&planets)?);
        return Ok(());
    }

    if planets.is_empty() {
        println!("No planets to show right now.");
        return Ok(());
    }

    let mut selection = Selection::with_rows(
        planets.len(),
        args.select.iter().filter_map(|row| row.checked_sub(1)),
    );
    if args.select_all {
        selection.select_all();
    }

    println!("{}", render(&planets, &selection));

    if feed.has_next_page() {
        println!("More planets available, raise --pages to load them.");
    }

    Ok(())
}
