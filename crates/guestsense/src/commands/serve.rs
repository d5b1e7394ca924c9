use anyhow::Context;
use guestsense_api::{build_router, AppState};
use guestsense_core::ServiceConfig;

pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    tracing::debug!(?config, "loaded configuration");
    let state = AppState::from_config(&config);
    tracing::info!(
        model = %config.model,
        ai_client = state.synthesis.is_client_ready(),
        timeout_secs = config.ai_timeout.as_secs(),
        "starting guestsense"
    );

    let app = build_router(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
