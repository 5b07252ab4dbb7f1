use derive_getters::Getters;
use rmcp::schemars;
use serde::Deserialize;

use crate::{errors::CrawlerServerError, services::Validate};

mod pagination;
pub use pagination::paginate;

fn default_max_length() -> usize {
    50_000
}

/// Parameters for crawling a URL
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct CrawlRequest {
    /// URL to extract content from
    url: String,
    #[serde(default = "default_max_length")]
    /// Maximum number of characters to return
    max_length: usize,
    #[serde(default)]
    /// Return output starting at this character index, useful if a previous crawl was truncated and more context is required
    start_index: usize,
    /// Return the page HTML as fetched, without extraction
    #[serde(default)]
    raw: bool,
}

impl CrawlRequest {
    #[cfg(test)]
    pub const INVALID: Self = Self {
        url: String::new(),
        max_length: 0,
        start_index: 0,
        raw: false,
    };

    #[cfg(test)]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            max_length: default_max_length(),
            start_index: 0,
            raw: false,
        }
    }
}

impl Validate for CrawlRequest {
    fn validate(&self) -> Result<(), CrawlerServerError> {
        if self.url.trim().is_empty() {
            return Err(CrawlerServerError::InvalidParams {
                message: "URL is required".to_string(),
            });
        }

        if self.max_length == 0 || self.max_length > 1_000_000 {
            return Err(CrawlerServerError::InvalidParams {
                message: "max_length must be between 1 and 1,000,000".to_string(),
            });
        }

        Ok(())
    }
}

/// Arguments for the crawl prompt
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct CrawlPromptArgs {
    /// URL to crawl
    url: String,
}

impl CrawlPromptArgs {
    #[cfg(test)]
    pub fn for_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl Validate for CrawlPromptArgs {
    fn validate(&self) -> Result<(), CrawlerServerError> {
        if self.url.trim().is_empty() {
            return Err(CrawlerServerError::InvalidParams {
                message: "URL is required".to_string(),
            });
        }

        Ok(())
    }
}
