mod http_client;
pub use http_client::build_client;

pub mod logging;

mod url_utils;
pub use url_utils::parse_crawl_url;
