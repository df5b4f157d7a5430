#![forbid(unsafe_code)]

use parley_server::{
    build_router_with_state, init_tracing, spawn_flush_worker, AppConfig, AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let app_config = AppConfig::from_env()?;
    let app_state = AppState::new(&app_config)?;
    let loaded = app_state
        .load_instance_defaults()
        .await
        .map_err(|e| anyhow::anyhow!("loading instance defaults failed: {e}"))?;
    tracing::info!(rows = loaded, "instance default permissions loaded");

    let worker = spawn_flush_worker(app_state.clone());
    let app = build_router_with_state(app_state.clone());
    let addr = app_config.bind_addr;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "parley-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::error!(%error, "failed to listen for shutdown signal");
            }
        })
        .await?;

    app_state.shutdown_flush(Some(worker)).await;
    Ok(())
}
