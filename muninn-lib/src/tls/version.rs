use tokio_rustls::rustls::ProtocolVersion;

/// Label used for versions outside TLS 1.0-1.3
pub const UNKNOWN_TLS_VERSION: &str = "unknown";

/// Canonical fingerprint label for a negotiated protocol version
pub fn tls_version_label(version: ProtocolVersion) -> &'static str {
    match version {
        ProtocolVersion::TLSv1_0 => "TLS1.0",
        ProtocolVersion::TLSv1_1 => "TLS1.1",
        ProtocolVersion::TLSv1_2 => "TLS1.2",
        ProtocolVersion::TLSv1_3 => "TLS1.3",
        _ => UNKNOWN_TLS_VERSION,
    }
}

/// Negotiated version label of an established TLS stream
pub fn negotiated_tls_version<S>(tls: &tokio_rustls::server::TlsStream<S>) -> &'static str {
    let (_, connection) = tls.get_ref();
    connection
        .protocol_version()
        .map(tls_version_label)
        .unwrap_or(UNKNOWN_TLS_VERSION)
}

/// Negotiated cipher suite name, used as a metrics label
pub fn negotiated_cipher_suite<S>(tls: &tokio_rustls::server::TlsStream<S>) -> String {
    let (_, connection) = tls.get_ref();
    connection
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()))
        .unwrap_or_else(|| UNKNOWN_TLS_VERSION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_versions() {
        assert_eq!(tls_version_label(ProtocolVersion::TLSv1_0), "TLS1.0");
        assert_eq!(tls_version_label(ProtocolVersion::TLSv1_1), "TLS1.1");
        assert_eq!(tls_version_label(ProtocolVersion::TLSv1_2), "TLS1.2");
        assert_eq!(tls_version_label(ProtocolVersion::TLSv1_3), "TLS1.3");
    }

    #[test]
    fn other_versions_are_unknown() {
        assert_eq!(tls_version_label(ProtocolVersion::SSLv3), "unknown");
        assert_eq!(tls_version_label(ProtocolVersion::DTLSv1_2), "unknown");
        assert_eq!(tls_version_label(ProtocolVersion::Unknown(0x7f1c)), "unknown");
    }
}
