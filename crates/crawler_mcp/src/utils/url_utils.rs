use crate::errors::CrawlerServerError;
use url::Url;

/// Parse a URL to crawl, accepting only http and https
pub fn parse_crawl_url(url: &str) -> Result<Url, CrawlerServerError> {
    let trimmed = url.trim();
    let parsed = Url::parse(trimmed).map_err(|_| CrawlerServerError::InvalidUrl {
        url: trimmed.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CrawlerServerError::UnsupportedScheme {
            url: trimmed.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
