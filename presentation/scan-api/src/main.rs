use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Receipt Scanner Entry Point
///
/// Loads configuration, wires dependencies, and starts the HTTP server.
///
/// Layout:
/// - config/: Application configuration (server, OpenAI)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let AppConfig { server, openai } = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(openai);

    // 5. Run server
    Server::run(server, container).await?;

    Ok(())
}
