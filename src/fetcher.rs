use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect;
use tracing::{debug, info};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Page retrieval seam. The pipeline only ever asks for the body of a URL,
/// so tests can substitute fixture-backed fakes.
pub trait Fetch {
    fn fetch_html(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Probe the category URL before scraping starts, so an invalid
    /// category fails with a readable message instead of an empty scrape.
    pub fn check_url(&self, url: &str) -> Result<()> {
        info!("Checking URL {url}");
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .with_context(|| format!("could not reach {url}"))?;
        debug!("Server responded with status code {}", response.status());
        response.error_for_status().with_context(|| {
            format!(
                "{url} did not respond with success; the category is most \
                 likely not valid or the server is not responding"
            )
        })?;
        Ok(())
    }
}

impl Fetch for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<String> {
        self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?
            .text()
            .with_context(|| format!("failed to read response body from {url}"))
    }
}
