use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use rmcp::{ServiceExt, transport::stdio};

use crate::config::Config;
use crate::errors::McpResult;
use crate::models::{CrawlPromptArgs, CrawlRequest, paginate};
use crate::services::{CrawlService, Validate};

#[derive(Clone)]
pub struct CrawlerServer {
    tool_router: ToolRouter<CrawlerServer>,
    prompt_router: PromptRouter<CrawlerServer>,
    service: CrawlService,
}

impl CrawlerServer {
    pub fn new(service: CrawlService) -> Self {
        Self {
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
            service,
        }
    }
}

#[tool_router]
impl CrawlerServer {
    #[tool(
        name = "web-crawler",
        description = "A powerful web content crawler tool that retrieves and processes raw content from specified URL.\n\nThe page is condensed into plain text with links kept as [text](href) and images as ![alt](src). Scripts, styles, navigation, headers, footers and sidebars are dropped."
    )]
    async fn crawl(&self, Parameters(req): Parameters<CrawlRequest>) -> McpResult<CallToolResult> {
        req.validate()?;

        let page = self.service.crawl(req.url(), *req.raw()).await?;
        let window = paginate(&page.content, *req.start_index(), *req.max_length());
        let response_text = format!("{}{}", page.prefix, window);

        Ok(CallToolResult::success(vec![Content::text(response_text)]))
    }
}

#[prompt_router]
impl CrawlerServer {
    /// Crawl a URL and extract its contents as markdown-flavored text
    #[prompt(name = "web-crawler")]
    async fn crawl_prompt(
        &self,
        Parameters(args): Parameters<CrawlPromptArgs>,
        _ctx: RequestContext<rmcp::RoleServer>,
    ) -> McpResult<GetPromptResult> {
        args.validate()?;
        match self.service.crawl(args.url(), false).await {
            Ok(page) => Ok(GetPromptResult {
                description: Some(format!("Contents of {}", page.url)),
                messages: vec![PromptMessage {
                    role: PromptMessageRole::User,
                    content: PromptMessageContent::text(format!("{}{}", page.prefix, page.content)),
                }],
            }),
            Err(e) => Ok(GetPromptResult {
                description: Some(format!("Failed to crawl {}", args.url())),
                messages: vec![PromptMessage {
                    role: PromptMessageRole::User,
                    content: PromptMessageContent::text(format!("Error: {}", e)),
                }],
            }),
        }
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for CrawlerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("Web Crawler MCP Server. Tool: web-crawler (fetches a URL and condenses the page into markdown-flavored text with inline links and images; supports start_index/max_length paging and raw HTML). Prompt: web-crawler (manual crawl of a URL).".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Web Crawler MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let service = CrawlService::from_config(&config)?;
    let server = CrawlerServer::new(service);

    let server = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    server.waiting().await?;

    Ok(())
}
