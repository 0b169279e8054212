use std::sync::Arc;

use crate::config::FingerprintConfig;
use crate::fingerprint::ConnectionInfo;
use crate::telemetry::Metrics;

/// Per-connection state shared by every request on that connection
#[derive(Clone)]
pub struct RequestContext {
    pub connection: ConnectionInfo,
    pub fingerprint: Arc<FingerprintConfig>,
    pub metrics: Option<Arc<Metrics>>,
}

impl RequestContext {
    pub fn new(
        connection: ConnectionInfo,
        fingerprint: Arc<FingerprintConfig>,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self { connection, fingerprint, metrics }
    }
}
