use std::sync::Arc;

use crate::telemetry::Metrics;
use crate::tls::version::{negotiated_cipher_suite, negotiated_tls_version};

pub fn record_tls_handshake_metrics<S>(
    tls: &tokio_rustls::server::TlsStream<S>,
    handshake_duration: f64,
    metrics: Option<&Arc<Metrics>>,
) {
    if let Some(m) = metrics {
        let cipher_suite = negotiated_cipher_suite(tls);
        m.record_tls_handshake(negotiated_tls_version(tls), &cipher_suite, handshake_duration);
    }
}
