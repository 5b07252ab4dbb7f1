use std::time::Duration;

use clap::Parser;

use crate::config::{Config, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::errors::{CrawlerResult, CrawlerServerError};
use crate::extract::Denylist;

const MAX_TIMEOUT_SECS: u64 = 600;

/// Web Crawler MCP Server
///
/// A Model Context Protocol server that fetches a web page and condenses it
/// into markdown-flavored text, keeping links and images as inline references.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-web-crawler
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "web-crawler": {
///       "command": "mcp-server-web-crawler",
///       "args": ["--timeout-secs", "30"],
///       "env": {
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG` / `LOG_LEVEL`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-web-crawler")]
#[command(about = "MCP server that crawls web pages into markdown-flavored text")]
#[command(version)]
pub struct Cli {
    /// Custom User-Agent string to use for requests
    #[arg(long, value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (1-600)
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Maximum number of redirects to follow
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Proxy URL to use for requests (e.g., http://proxy:8080)
    #[arg(long, value_name = "URL")]
    pub proxy_url: Option<String>,

    /// Additional tag to strip before extraction, on top of the built-in
    /// script, style, nav, header, footer, aside and noscript. Repeatable.
    #[arg(long = "strip-tag", value_name = "TAG")]
    pub strip_tags: Vec<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> CrawlerResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> CrawlerResult<Config> {
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(CrawlerServerError::Configuration {
                message: format!("timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
            });
        }

        let user_agent = match self.user_agent {
            Some(agent) if agent.trim().is_empty() => {
                return Err(CrawlerServerError::Configuration {
                    message: "user agent must not be empty".to_string(),
                });
            }
            Some(agent) => agent,
            None => DEFAULT_USER_AGENT.to_string(),
        };

        if let Some(tag) = self.strip_tags.iter().find(|tag| !is_tag_name(tag)) {
            return Err(CrawlerServerError::Configuration {
                message: format!("invalid tag name to strip: '{tag}'"),
            });
        }

        Ok(Config {
            user_agent,
            timeout: Duration::from_secs(self.timeout_secs),
            max_redirects: self.max_redirects,
            proxy_url: self.proxy_url,
            denylist: Denylist::with_extra(&self.strip_tags),
        })
    }
}

fn is_tag_name(tag: &str) -> bool {
    let tag = tag.trim();
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
