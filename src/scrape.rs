use anyhow::Result;
use tracing::info;

use crate::fetcher::Fetch;
use crate::models::ProductRecord;
use crate::parser::{self, FieldPolicy};
use crate::resolver;

/// Walk every listing page of a category and the detail page of every
/// product found, one request at a time. Records keep listing order.
pub fn scrape_category<F: Fetch>(
    fetcher: &F,
    category_url: &str,
    policy: FieldPolicy,
) -> Result<Vec<ProductRecord>> {
    let entry_html = fetcher.fetch_html(category_url)?;
    let pages = parser::page_count(&entry_html);
    info!("Category has {pages} listing page(s)");

    let mut records = Vec::new();
    for page in 1..=pages {
        info!("Scraping page {page}...");
        let html = if page == 1 {
            entry_html.clone()
        } else {
            fetcher.fetch_html(&resolver::page_url(category_url, page))?
        };

        let links = parser::detail_links(&html);
        if links.is_empty() {
            // The advertised count ran ahead of the actual listings; stop
            // here instead of walking empty pages.
            info!("Page {page} has no listings, stopping");
            break;
        }

        for link in links {
            let detail_html = fetcher.fetch_html(&link)?;
            records.push(parser::parse_product(&link, &detail_html, policy)?);
        }
    }

    info!("Scraping done, products scraped: {}", records.len());
    Ok(records)
}
