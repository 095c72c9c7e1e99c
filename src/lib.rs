use scraper::Html;
use serde::Serialize;
use std::io::Write;
use tokio::time::Instant;
use tracing::{debug, error, info};

pub mod plants;
pub mod query;

mod config;
mod error;
mod fetch;
mod output;

pub use config::Config;
pub use error::{CrawlerError, ExtractionError};
pub use fetch::HttpFetcher;
pub use output::OutputFormat;

pub trait Item {
    fn title(&self) -> Option<&str>;
}

/// Site specific knowledge of where links and fields live in the markup.
pub trait Shop {
    type Detail: Item + Serialize;

    /// Absolute item links in document order.
    ///
    /// `Ok(vec![])` means the listing has no more items. A malformed item
    /// container fails the whole page instead of being skipped.
    fn extract_links(&self, doc: &Html) -> Result<Vec<String>, ExtractionError>;
    fn extract_detail(&self, doc: &Html) -> Self::Detail;
}

#[async_trait::async_trait]
pub trait Fetcher: Sync {
    /// Body of `url`. Network errors and non 2xx statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError>;
}

#[derive(Debug)]
pub struct CrawlSummary<D> {
    /// Listing pages fetched, including the one that ended the crawl.
    pub pages: u32,
    pub items: Vec<D>,
}

/// Walks `listing_url?page=1`, `?page=2`, ... one request at a time, printing
/// every item found to `out`.
///
/// Stops at the first page without item links, or before `page_limit`. A page
/// whose links cannot be extracted is logged and ends the crawl like an empty
/// page. Any failed fetch aborts the crawl.
pub async fn run_crawler<S, F, W>(
    shop: &S,
    fetcher: &F,
    config: &Config,
    format: OutputFormat,
    out: &mut W,
) -> Result<CrawlSummary<S::Detail>, CrawlerError>
where
    S: Shop,
    F: Fetcher,
    W: Write,
{
    let started = Instant::now();
    let listing_url = config.listing_url();
    info!(
        "Starting crawl for {} items: {}",
        config.catalog().replace('-', " "),
        listing_url
    );

    let mut pages = 0;
    let mut items = vec![];

    for page in 1..config.page_limit() {
        debug!("Crawling page number {}", page);
        let html = fetcher
            .fetch(&format!("{}?page={}", listing_url, page))
            .await?;
        pages += 1;

        let links = {
            let doc = Html::parse_document(&html);
            shop.extract_links(&doc)
        };
        let links = match links {
            Ok(links) => links,
            Err(e) => {
                error!("Failed to extract item links from page {}: {}", page, e);
                vec![]
            }
        };

        if links.is_empty() {
            info!("No more item links found, stopping at page {}", page);
            break;
        }

        let mut details = Vec::with_capacity(links.len());
        for link in &links {
            let html = fetcher.fetch(link).await?;
            let detail = {
                let doc = Html::parse_document(&html);
                shop.extract_detail(&doc)
            };
            details.push(detail);
        }
        info!("Collected {} item details for page {}", details.len(), page);

        for detail in &details {
            output::emit(out, format, detail)?;
        }
        out.flush()?;
        items.extend(details);
    }

    info!(
        "Crawled {} pages, {} items in {:?}",
        pages,
        items.len(),
        started.elapsed()
    );

    Ok(CrawlSummary { pages, items })
}
