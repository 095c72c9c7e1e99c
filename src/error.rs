#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("Output error")]
    Io(#[from] std::io::Error),
    #[error("Serialization error")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Listing page markup did not have the expected shape.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("Item container {index} has no anchor")]
    MissingAnchor { index: usize },
    #[error("Anchor in item container {index} has no href")]
    MissingHref { index: usize },
}
