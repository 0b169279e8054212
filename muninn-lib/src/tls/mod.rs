pub mod acceptor;
pub mod metrics;
pub mod version;

pub use acceptor::build_rustls;
pub use metrics::record_tls_handshake_metrics;
pub use version::{negotiated_tls_version, tls_version_label, UNKNOWN_TLS_VERSION};
