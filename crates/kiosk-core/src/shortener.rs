use crate::repository::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::Serialize;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

/// Parameters for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct ShortenParams {
    /// The original URL to be shortened.
    pub original_url: String,
}

impl ShortenParams {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A short code together with the URL it points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortLink {
    pub code: ShortCode,
    pub original_url: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates the URL, assigns a short code and stores the mapping.
    async fn shorten(&self, params: ShortenParams) -> Result<ShortLink>;

    /// Resolves a short code to its stored URL record.
    /// Returns `None` if the code does not exist.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlRecord>>;
}
