use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_rustls::TlsAcceptor;
use tracing::{debug, warn};

use super::{serve_http, ConnectionSettings};
use crate::fingerprint::ConnectionInfo;
use crate::telemetry::metrics::values;
use crate::tls::{negotiated_tls_version, record_tls_handshake_metrics};

/// Handle a TLS connection
///
/// The negotiated protocol version becomes the `tls` part of every
/// fingerprint computed on this connection.
pub async fn handle_tls_connection(
    stream: TcpStream,
    peer: std::net::SocketAddr,
    acceptor: TlsAcceptor,
    settings: ConnectionSettings,
) {
    let metrics = settings.metrics.clone();
    let handshake_start = Instant::now();
    let tls_accept_result =
        tokio::time::timeout(settings.tls_handshake_timeout, acceptor.accept(stream)).await;

    let tls = match tls_accept_result {
        Ok(Ok(tls)) => tls,
        Ok(Err(e)) => {
            warn!(?peer, error = %e, "TLS accept failed");
            if let Some(ref m) = metrics {
                m.record_tls_handshake_error();
            }
            return;
        }
        Err(_) => {
            warn!(?peer, "TLS handshake timeout");
            if let Some(ref m) = metrics {
                m.record_timeout(values::TIMEOUT_TLS_HANDSHAKE);
                m.record_tls_handshake_error();
            }
            return;
        }
    };

    let handshake_duration = handshake_start.elapsed().as_secs_f64();
    record_tls_handshake_metrics(&tls, handshake_duration, metrics.as_ref());

    let tls_version = negotiated_tls_version(&tls);
    debug!(?peer, tls_version, "TLS handshake complete");

    serve_http(tls, ConnectionInfo::tls(peer, tls_version), &settings).await;
}
