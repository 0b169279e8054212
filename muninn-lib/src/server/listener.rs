use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{MuninnError, Result};
use crate::server::connection::ConnectionTracker;
use crate::server::transport::{handle_plain_connection, handle_tls_connection, ConnectionSettings};
use crate::telemetry::Metrics;
use crate::tls::build_rustls;

/// Bind the configured address and serve until SIGTERM/SIGINT
pub async fn run(config: Arc<Config>, metrics: Option<Arc<Metrics>>) -> Result<()> {
    let listener = TcpListener::bind(config.listen).await?;
    let shutdown = shutdown_signal()?;
    serve(listener, config, metrics, shutdown).await
}

/// Future that resolves on the first SIGTERM or SIGINT
pub fn shutdown_signal() -> Result<impl Future<Output = ()> + Send> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
        MuninnError::Io(std::io::Error::other(format!("Failed to setup SIGTERM handler: {e}")))
    })?;
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).map_err(|e| {
        MuninnError::Io(std::io::Error::other(format!("Failed to setup SIGINT handler: {e}")))
    })?;

    Ok(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, initiating graceful shutdown"),
            _ = sigint.recv() => info!("Received SIGINT, initiating graceful shutdown"),
        }
    })
}

/// Accept connections on `listener` until `shutdown` resolves
///
/// Each connection runs on its own task. After shutdown the listener is closed
/// and in-flight connections get `timeout.shutdown_secs` to finish.
pub async fn serve<F>(
    listener: TcpListener,
    config: Arc<Config>,
    metrics: Option<Arc<Metrics>>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let tls_acceptor = config.tls.as_ref().map(build_rustls).transpose()?;
    let settings = ConnectionSettings::from_config(&config, metrics.clone());
    let tracker = ConnectionTracker::new();

    let addr = listener.local_addr()?;
    info!(?addr, tls = tls_acceptor.is_some(), "fingerprint server listening");

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok((stream, peer)) => (stream, peer),
                    Err(e) => {
                        warn!(error = %e, "accept error");
                        continue;
                    }
                };

                let guard = tracker.track(metrics.as_ref());
                let settings = settings.clone();
                match &tls_acceptor {
                    Some(acceptor) => {
                        let acceptor = acceptor.clone();
                        tokio::spawn(async move {
                            let _guard = guard;
                            handle_tls_connection(stream, peer, acceptor, settings).await;
                        });
                    }
                    None => {
                        tokio::spawn(async move {
                            let _guard = guard;
                            handle_plain_connection(stream, peer, settings).await;
                        });
                    }
                }
            }
        }
    }
    drop(listener);

    info!(
        active_connections = tracker.active(),
        "Waiting for active connections to finish (timeout: {}s)", config.timeout.shutdown_secs
    );
    if tracker.wait_for_drain(config.timeout.shutdown()).await {
        info!("All connections closed, shutdown complete");
    } else {
        warn!(
            active_connections = tracker.active(),
            "Shutdown timeout reached, {} connections still active",
            tracker.active()
        );
    }

    info!("Fingerprint server stopped");
    Ok(())
}
