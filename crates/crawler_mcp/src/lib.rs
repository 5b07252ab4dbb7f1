//! Web Crawler MCP server.
//!
//! Fetches web pages and condenses them into compact, markdown-flavored text.
//! The extraction pipeline in [`extract`] is pure and usable on its own:
//!
//! ```
//! use mcp_server_web_crawler::extract::{Denylist, html_to_text};
//!
//! let text = html_to_text(
//!     r#"<script>track()</script><p>Read <a href="/docs">the docs</a></p>"#,
//!     &Denylist::default(),
//! );
//! assert_eq!(text, "Read [the docs](/docs)");
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
