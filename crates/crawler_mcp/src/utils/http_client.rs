use reqwest::{Client, Proxy};

use crate::config::Config;
use crate::errors::CrawlerServerError;

/// Build a reqwest client from the server configuration
pub fn build_client(config: &Config) -> Result<Client, CrawlerServerError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects));

    if let Some(proxy_url) = &config.proxy_url {
        let proxy = Proxy::all(proxy_url).map_err(|e| CrawlerServerError::ClientError {
            message: format!("invalid proxy URL {proxy_url}: {e}"),
        })?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(|e| CrawlerServerError::ClientError {
        message: e.to_string(),
    })
}
