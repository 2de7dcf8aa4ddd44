use axum::Router;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serves `app` until `shutdown` is cancelled, then drains in-flight requests.
pub async fn start_web_server(
    bind_addr: SocketAddr,
    app: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Web server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Web server stopped");
    Ok(())
}
