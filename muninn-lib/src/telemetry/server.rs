use hyper::body::Incoming;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use prometheus::Registry;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::Result;
use crate::server::response::{empty_response, RespBody};
use crate::telemetry::{handle_metrics, health_check_response, live_check_response};

/// Start the observability server that handles metrics and health checks
/// This server runs on a dedicated port and serves:
/// - `/metrics` - Prometheus metrics
/// - `/health` - Health check endpoint
/// - `/live` - Liveness check endpoint
pub async fn start_observability_server<F>(
    port: u16,
    registry: Registry,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    serve_observability(listener, registry, shutdown).await
}

/// Serve observability endpoints on an already bound listener
pub async fn serve_observability<F>(
    listener: TcpListener,
    registry: Registry,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let registry = Arc::new(registry);
    info!(addr = ?listener.local_addr().ok(), "Observability server started (metrics + health checks)");

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Observability server: shutting down");
                break;
            }
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok((stream, peer)) => (stream, peer),
                    Err(e) => {
                        warn!(error = %e, "Observability server: accept error");
                        continue;
                    }
                };

                let registry = registry.clone();
                tokio::spawn(async move {
                    let svc = hyper::service::service_fn(move |req: Request<Incoming>| {
                        let registry = registry.clone();
                        async move { Ok::<_, hyper::Error>(route_observability(req.uri().path(), &registry)) }
                    });

                    let builder = ConnBuilder::new(TokioExecutor::new());
                    if let Err(e) = builder.serve_connection(TokioIo::new(stream), svc).await {
                        warn!(?peer, error = %e, "Observability server: serve_connection error");
                    }
                });
            }
        }
    }

    info!("Observability server stopped");
    Ok(())
}

fn route_observability(path: &str, registry: &Registry) -> Response<RespBody> {
    let result = match path {
        "/health" => health_check_response(),
        "/live" => live_check_response(),
        "/metrics" => handle_metrics(registry),
        _ => return empty_response(StatusCode::NOT_FOUND),
    };
    result.unwrap_or_else(|e| {
        warn!(error = %e, path, "Observability server: failed to build response");
        empty_response(StatusCode::INTERNAL_SERVER_ERROR)
    })
}
