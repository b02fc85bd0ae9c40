use std::sync::Arc;

use chat_proxy::{config::Config, routes, state::AppState};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config));

    let app = routes::create_router().with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(state.config.listen_addr).await?;
    let addr = listener.local_addr()?;

    tracing::info!(
        %addr,
        backend = %state.config.backend_base_url,
        timeout_secs = state.config.backend_timeout.as_secs(),
        "chat proxy listening on {}",
        routes::CHAT_COMPLETIONS_PATH
    );
    axum::serve(listener, app).await?;

    Ok(())
}
