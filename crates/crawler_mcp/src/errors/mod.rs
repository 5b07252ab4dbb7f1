mod crawler_error;

pub use crawler_error::CrawlerServerError;

pub type McpError = rmcp::ErrorData;

/// Result type for crawler operations
pub type CrawlerResult<T> = Result<T, CrawlerServerError>;

/// Type alias for MCP results
pub type McpResult<T> = Result<T, McpError>;
