use tokio::net::TcpStream;

use super::{serve_http, ConnectionSettings};
use crate::fingerprint::ConnectionInfo;

/// Handle a plain HTTP connection
///
/// Fingerprints of requests on this connection carry no `tls` part.
pub async fn handle_plain_connection(
    stream: TcpStream,
    peer: std::net::SocketAddr,
    settings: ConnectionSettings,
) {
    serve_http(stream, ConnectionInfo::plain(peer), &settings).await;
}
