use guest_list::shell::config::{AppConfig, Backend};
use guest_list::shell::http::router;
use guest_list::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let state = match config.backend {
        Backend::Memory => AppState::in_memory(),
    };

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, backend = ?config.backend, "guest list listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
