use mcp_server_web_crawler::{cli::Cli, server, utils::logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging()?;

    tracing::info!(
        user_agent = %config.user_agent,
        timeout_secs = config.timeout.as_secs(),
        max_redirects = config.max_redirects,
        "Starting Web Crawler MCP server"
    );

    if let Some(ref proxy) = config.proxy_url {
        tracing::info!("Using proxy: {}", proxy);
    }

    let stripped: Vec<&str> = config.denylist.tags().collect();
    tracing::info!("Stripping tags before extraction: {}", stripped.join(", "));

    // Run the MCP server
    if let Err(e) = server::run(config).await {
        tracing::error!("Failed to run MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
