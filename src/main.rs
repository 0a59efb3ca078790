use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use futures::stream::{self, StreamExt};

use gift_scrapping::config::load_config;
use gift_scrapping::utilities::csv_reader::read_urls;
use gift_scrapping::utilities::csv_writer::write_entries;
use gift_scrapping::utilities::logging::init_logging;
use gift_scrapping::{HttpFetcher, ProductExtractor, ScrapeStatus, WishlistEntry};

/// Scrape name, image and price for gift and wishlist product URLs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Product URLs to scrape.
    urls: Vec<String>,

    /// CSV file with product URLs in its first column (overrides `file.source_data`).
    #[arg(short, long)]
    input: Option<String>,

    /// Output CSV file (overrides `file.processing_data`).
    #[arg(short, long)]
    output: Option<String>,

    /// Settings file.
    #[arg(short, long, default_value = "Settings.toml")]
    config: String,

    /// Print the entries as JSON instead of writing the CSV file.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration settings
    let config = load_config(&cli.config).context("Failed to load configuration")?;
    init_logging(&config.logging.level)?;

    let mut urls = cli.urls.clone();
    if let Some(source) = cli.input.as_deref().or(config.file.source_data.as_deref()) {
        urls.extend(read_urls(source).await?);
    }
    if urls.is_empty() {
        anyhow::bail!("No product URLs given, pass them as arguments or with --input");
    }

    tracing::info!(
        "{} {} scraping {} URL(s)",
        config.base.name,
        config.base.version,
        urls.len()
    );

    let extractor = ProductExtractor::new(HttpFetcher::new(
        config.scraper.personas(),
        config.scraper.timeout(),
    ));
    let max_concurrency = config.scraper.max_concurrency.max(1);

    // Each URL is an independent extraction, only the number in flight is bounded
    let entries: Vec<WishlistEntry> = stream::iter(urls.iter())
        .map(|url| {
            let extractor = &extractor;
            async move { WishlistEntry::from_extraction(url, extractor.extract(url).await) }
        })
        .buffered(max_concurrency)
        .collect()
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let output = cli.output.as_deref().unwrap_or(&config.file.processing_data);
        write_entries(output, &entries).await?;
        println!("{}", format!("Entries written to {}", output).green());
    }

    let found = entries
        .iter()
        .filter(|entry| entry.status == ScrapeStatus::Found)
        .count();
    let summary = format!("{} of {} URL(s) yielded product data", found, entries.len());
    if found == entries.len() {
        eprintln!("{}", summary.green());
    } else {
        eprintln!("{}", summary.yellow());
    }

    Ok(())
}
