use std::sync::Arc;

use anyhow::Context;
use sunglasses_api::config::{AppConfig, LogFormat};
use sunglasses_api::router::create_app_router;
use sunglasses_api::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;

    init_tracing(config.log_format);

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config).context("failed to load fixtures")?);
    tracing::info!(
        brands = state.catalog.brands().len(),
        products = state.catalog.products().len(),
        users = state.users.users().len(),
        sessions = state.sessions.len(),
        "Fixtures loaded"
    );

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sunglasses_api=info,tower_http=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
