use serde_json::json;

use super::McpError;

/// Failures of the crawler around the extraction core
#[derive(Debug, thiserror::Error)]
pub enum CrawlerServerError {
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Unsupported URL scheme '{scheme}' for {url}")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("Failed to fetch {url}: {message}")]
    FetchError { url: String, message: String },
    #[error("HTTP error {status} for {url}")]
    HttpError { url: String, status: u16 },
    #[error("HTTP client error: {message}")]
    ClientError { message: String },
    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
    #[error("Configuration validation failed: {message}")]
    Configuration { message: String },
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

// Error codes
const ERROR_INVALID_URL: &str = "invalid_url";
const ERROR_UNSUPPORTED_SCHEME: &str = "unsupported_scheme";
const ERROR_FETCH_ERROR: &str = "fetch_error";
const ERROR_HTTP_ERROR: &str = "http_error";
const ERROR_CLIENT_ERROR: &str = "client_error";
const ERROR_INVALID_PARAMS: &str = "invalid_params";
const ERROR_CONFIGURATION: &str = "configuration_error";
const ERROR_LOGGING: &str = "logging_error";

impl From<CrawlerServerError> for McpError {
    fn from(err: CrawlerServerError) -> Self {
        match err {
            CrawlerServerError::InvalidUrl { url } => {
                McpError::invalid_params(ERROR_INVALID_URL, Some(json!({ "url": url })))
            }
            CrawlerServerError::UnsupportedScheme { url, scheme } => McpError::invalid_params(
                ERROR_UNSUPPORTED_SCHEME,
                Some(json!({ "url": url, "scheme": scheme })),
            ),
            CrawlerServerError::FetchError { url, message } => McpError::internal_error(
                ERROR_FETCH_ERROR,
                Some(json!({ "url": url, "message": message })),
            ),
            CrawlerServerError::HttpError { url, status } => McpError::internal_error(
                ERROR_HTTP_ERROR,
                Some(json!({ "url": url, "status": status })),
            ),
            CrawlerServerError::ClientError { message } => {
                McpError::internal_error(ERROR_CLIENT_ERROR, Some(json!({ "message": message })))
            }
            CrawlerServerError::InvalidParams { message } => {
                McpError::invalid_params(ERROR_INVALID_PARAMS, Some(json!({ "message": message })))
            }
            CrawlerServerError::Configuration { message } => {
                McpError::invalid_params(ERROR_CONFIGURATION, Some(json!({ "message": message })))
            }
            CrawlerServerError::LoggingInitialization(message) => {
                McpError::internal_error(ERROR_LOGGING, Some(json!({ "message": message })))
            }
        }
    }
}
