use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use url::Url;

use crate::config::Config;
use crate::errors::{CrawlerResult, CrawlerServerError};
use crate::utils::build_client;

/// A page as delivered by a renderer
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Location after redirects
    pub url: Url,
    pub content_type: Option<String>,
    pub body: String,
}

/// Produces the HTML of a page.
///
/// This is where a headless browser would plug in; the bundled
/// implementation fetches over plain HTTP.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(&self, url: &Url) -> CrawlerResult<RenderedPage>;
}

/// Renderer backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(config: &Config) -> CrawlerResult<Self> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &Url) -> CrawlerResult<RenderedPage> {
        let fetch_error = |e: reqwest::Error| CrawlerServerError::FetchError {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        tracing::debug!(%url, %status, "received response");
        if !status.is_success() {
            return Err(CrawlerServerError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(fetch_error)?;

        Ok(RenderedPage {
            url: final_url,
            content_type,
            body,
        })
    }
}
