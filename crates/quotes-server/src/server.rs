//! HTTP listener lifecycle with bounded graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// Serve `app` until `shutdown` resolves, then give in-flight requests up to
/// `grace` to finish before aborting the server task.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F, grace: Duration) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            // Listener exited without a stop request
            return res.context("Server task panicked")?.context("Server error");
        }
        _ = shutdown => {}
    }

    debug!("HTTP server: stop started");
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(res) => {
            res.context("Server task panicked")?.context("Server error")?;
            info!("HTTP server: stop successful");
        }
        Err(_) => {
            warn!(
                "HTTP server: in-flight requests still running after {:?}, closing",
                grace
            );
            server.abort();
        }
    }

    Ok(())
}

/// Resolves on SIGINT or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
