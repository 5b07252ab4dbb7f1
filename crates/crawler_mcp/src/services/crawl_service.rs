use std::sync::Arc;

use url::Url;

use crate::config::Config;
use crate::errors::CrawlerResult;
use crate::extract::Extractor;
use crate::services::{HttpRenderer, PageRenderer, RenderedPage};
use crate::utils::parse_crawl_url;

pub const SIMPLIFICATION_FAILED: &str = "<error>Page failed to be simplified from HTML</error>";

/// Outcome of a crawl
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// Location after redirects
    pub url: Url,
    /// Note placed before the content, empty for extracted HTML
    pub prefix: String,
    pub content: String,
}

/// Renders pages and runs them through the extraction pipeline
#[derive(Clone)]
pub struct CrawlService {
    renderer: Arc<dyn PageRenderer>,
    extractor: Extractor,
}

impl CrawlService {
    pub fn new(renderer: Arc<dyn PageRenderer>, extractor: Extractor) -> Self {
        Self {
            renderer,
            extractor,
        }
    }

    pub fn from_config(config: &Config) -> CrawlerResult<Self> {
        let renderer = HttpRenderer::new(config)?;
        Ok(Self::new(
            Arc::new(renderer),
            Extractor::new(config.denylist.clone()),
        ))
    }

    /// Fetch `url` and condense it to text, or hand back the page untouched when `raw`
    pub async fn crawl(&self, url: &str, raw: bool) -> CrawlerResult<CrawledPage> {
        let url = parse_crawl_url(url)?;
        tracing::info!(%url, raw, "crawling page");

        let page = self.renderer.render(&url).await.inspect_err(|e| {
            tracing::warn!(%url, error = %e, "failed to render page");
        })?;

        Ok(self.condense(page, raw))
    }

    fn condense(&self, page: RenderedPage, raw: bool) -> CrawledPage {
        if raw {
            return CrawledPage {
                url: page.url,
                prefix: String::new(),
                content: page.body,
            };
        }

        if !is_html(page.content_type.as_deref(), &page.body) {
            let content_type = page.content_type.unwrap_or_default();
            tracing::debug!(%content_type, "returning non-HTML content as-is");
            return CrawledPage {
                url: page.url,
                prefix: format!(
                    "Content type {content_type} cannot be simplified to markdown, but here is the raw content:\n"
                ),
                content: page.body,
            };
        }

        let text = self.extractor.extract_html(&page.body);
        tracing::debug!(
            html_len = page.body.len(),
            text_len = text.len(),
            "condensed page"
        );

        let content = if text.is_empty() {
            SIMPLIFICATION_FAILED.to_string()
        } else {
            text
        };

        CrawledPage {
            url: page.url,
            prefix: String::new(),
            content,
        }
    }
}

/// A page counts as HTML when it says so, says nothing, or starts like HTML
fn is_html(content_type: Option<&str>, body: &str) -> bool {
    let Some(content_type) = content_type.filter(|ct| !ct.trim().is_empty()) else {
        return true;
    };

    let declared_html = content_type.parse::<mime::Mime>().is_ok_and(|mime| {
        mime.subtype() == mime::HTML || mime.essence_str() == "application/xhtml+xml"
    });

    declared_html || sniff_html(body)
}

fn sniff_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(100)
        .collect::<String>()
        .to_ascii_lowercase();
    head.contains("<html") || head.starts_with("<!doctype html")
}
