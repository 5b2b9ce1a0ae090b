//! NutriLens
//!
//! An MCP server for meal health scoring and food logging.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutrilens::build_info;
use nutrilens::config::AppConfig;
use nutrilens::db::Database;
use nutrilens::mcp::NutrilensService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr to keep stdout free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrilens=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = AppConfig::from_env();
    tracing::info!(
        path = %config.database_path.display(),
        policy = ?config.scoring.policy,
        "Starting MCP server on stdio"
    );

    let database = Database::open(&config.database_path)?;
    let service = NutrilensService::new(&config, database);

    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
