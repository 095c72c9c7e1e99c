use crate::CrawlerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    page_limit: u32,
    catalog: String,
}

impl Config {
    /// `page_limit` is exclusive: pages `1..page_limit` may be crawled.
    pub fn new<B, C>(base_url: B, page_limit: u32, catalog: C) -> Result<Config, CrawlerError>
    where
        B: AsRef<str>,
        C: AsRef<str>,
    {
        let base_url = base_url.as_ref().trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CrawlerError::InvalidConfig(format!(
                "base url must be http(s): {:?}",
                base_url
            )));
        }
        if page_limit == 0 {
            return Err(CrawlerError::InvalidConfig(
                "page limit must be at least 1".to_string(),
            ));
        }
        let catalog = catalog.as_ref().trim().trim_matches('/');
        if catalog.is_empty() {
            return Err(CrawlerError::InvalidConfig(
                "catalog must not be empty".to_string(),
            ));
        }

        Ok(Config {
            base_url: base_url.to_string(),
            page_limit,
            catalog: catalog.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn listing_url(&self) -> String {
        format!("{}/collections/{}", self.base_url, self.catalog)
    }

    /// Relative hrefs are appended to the base url as-is.
    pub fn absolute_url(&self, href: &str) -> String {
        format!("{}{}", self.base_url, href)
    }
}
