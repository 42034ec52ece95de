use anyhow::Context;

use vpaygo_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vpaygo_observability::init();

    let config = ApiConfig::from_env().context("invalid server configuration")?;
    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "static client directory not found; only the API will be served"
        );
    }

    let app = vpaygo_api::app::build_app(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server running on http://localhost:{}", listener.local_addr()?.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
