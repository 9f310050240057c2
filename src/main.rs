use anyhow::Result;

use mood_gateway::config::GatewayConfig;
use mood_gateway::routes;
use mood_gateway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so cargo run picks up the downstream service URLs
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();
    let state = AppState::new(&config);
    let app = routes::app(state);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting gateway on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
