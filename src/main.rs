mod archiver;
mod fetcher;
mod models;
mod parser;
mod resolver;
mod scrape;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::fetcher::HttpFetcher;
use crate::parser::FieldPolicy;

/// Scrape an osta.ee product category into a JSON file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Category path to scrape, e.g. arvutid/sulearvutid
    category: String,
    /// Output filename, defaults to a name derived from the category
    output: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "info,html5ever=error,selectors=error,reqwest=warn".into()
        }))
        .init();

    let args = Args::parse();
    let category = args.category.trim_matches('/').to_string();
    if category.is_empty() {
        anyhow::bail!(
            "please enter a valid category to scrape, for example arvutid/sulearvutid"
        );
    }

    let url = resolver::category_url(&category);
    let output = args
        .output
        .unwrap_or_else(|| resolver::default_output_filename(&category));

    let fetcher = HttpFetcher::new()?;
    fetcher.check_url(&url)?;

    info!("Scraping category at url: {url}");
    let records = scrape::scrape_category(&fetcher, &url, FieldPolicy::default())?;

    info!("Writing results to {output}...");
    archiver::save_to_file(&records, &output)?;
    info!("Scrape results successfully written to file");
    Ok(())
}
