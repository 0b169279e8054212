pub mod plain;
pub mod tls;

use std::sync::Arc;

use hyper::body::Incoming;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::Duration;
use tracing::warn;

use crate::config::{Config, FingerprintConfig, KeepAliveConfig};
use crate::fingerprint::ConnectionInfo;
use crate::server::context::RequestContext;
use crate::server::handler::respond;
use crate::telemetry::metrics::values;
use crate::telemetry::Metrics;

pub use plain::handle_plain_connection;
pub use tls::handle_tls_connection;

/// Settings shared by every accepted connection
#[derive(Clone)]
pub struct ConnectionSettings {
    pub builder: ConnBuilder<TokioExecutor>,
    pub fingerprint: Arc<FingerprintConfig>,
    pub metrics: Option<Arc<Metrics>>,
    pub tls_handshake_timeout: Duration,
    /// `None` lets a connection live as long as the client keeps it open
    pub connection_handling_timeout: Option<Duration>,
}

impl ConnectionSettings {
    pub fn from_config(config: &Config, metrics: Option<Arc<Metrics>>) -> Self {
        Self {
            builder: build_conn_builder(&config.timeout.keep_alive),
            fingerprint: Arc::new(config.fingerprint.clone()),
            metrics,
            tls_handshake_timeout: config.timeout.tls_handshake(),
            connection_handling_timeout: config.timeout.connection_handling(),
        }
    }
}

/// HTTP/1.1 + HTTP/2 connection builder
pub fn build_conn_builder(keep_alive: &KeepAliveConfig) -> ConnBuilder<TokioExecutor> {
    let mut builder = ConnBuilder::new(TokioExecutor::new());
    builder.http1().keep_alive(keep_alive.enabled);
    builder
}

/// Serve HTTP on an established (plain or TLS) stream
pub(crate) async fn serve_http<I>(io: I, connection: ConnectionInfo, settings: &ConnectionSettings)
where
    I: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let peer = connection.peer;
    let ctx = RequestContext::new(connection, settings.fingerprint.clone(), settings.metrics.clone());

    let svc = hyper::service::service_fn(move |req: Request<Incoming>| {
        let ctx = ctx.clone();
        async move { Ok::<_, hyper::Error>(respond(&req, &ctx)) }
    });

    let conn = settings.builder.serve_connection(TokioIo::new(io), svc);
    let result = match settings.connection_handling_timeout {
        Some(limit) => match tokio::time::timeout(limit, conn).await {
            Ok(result) => result,
            Err(_) => {
                warn!(?peer, "connection handling timeout");
                if let Some(ref m) = settings.metrics {
                    m.record_timeout(values::TIMEOUT_CONNECTION_HANDLING);
                }
                return;
            }
        },
        None => conn.await,
    };

    if let Err(e) = result {
        warn!(?peer, error = %e, "serve_connection error");
    }
}
