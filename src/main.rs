use anyhow::Context;
use dotenv::dotenv;
use singpass_login::{create_app, AppState, Config, UuidTokenSource};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("singpass_login=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    if config.initial_auth_options.is_none() {
        tracing::info!("no SINGPASS_CLIENT_ID set, waiting for auth options on /auth-options");
    }
    let listen_addr = config.listen_addr;
    let app = create_app(AppState::new(config, Arc::new(UuidTokenSource)));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
