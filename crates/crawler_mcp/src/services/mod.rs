mod crawl_service;
pub use crawl_service::{CrawlService, CrawledPage};

mod renderer;
pub use renderer::{HttpRenderer, PageRenderer, RenderedPage};

mod validation;
pub use validation::Validate;
