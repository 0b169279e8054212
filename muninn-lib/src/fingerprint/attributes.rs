use std::collections::HashMap;

/// The four negotiation headers that always occupy a fixed fingerprint position
///
/// Missing headers are represented by empty strings, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryHeaders {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub accept_encoding: String,
}

/// Observable attributes of a single request
///
/// Built once per request by the extractor (or by any caller with its own
/// transport), consumed by [`compute_fingerprint`](super::compute_fingerprint)
/// and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestAttributes {
    /// Best-effort client IP, resolved according to the trusted-proxy policy
    pub client_address: String,
    /// Request method, e.g. `GET`
    pub method: String,
    /// Protocol version, e.g. `HTTP/1.1`
    pub protocol_version: String,
    /// Negotiated TLS label (`TLS1.2`, `TLS1.3`, ...), `None` for plain connections
    pub tls_version: Option<String>,
    /// Port portion of the request host, `None` when the host carries no port
    pub port: Option<String>,
    pub primary: PrimaryHeaders,
    /// Allow-listed headers keyed by lowercase name, one value per name
    pub extra_headers: HashMap<String, String>,
}

impl RequestAttributes {
    pub fn new(
        client_address: impl Into<String>,
        method: impl Into<String>,
        protocol_version: impl Into<String>,
    ) -> Self {
        Self {
            client_address: client_address.into(),
            method: method.into(),
            protocol_version: protocol_version.into(),
            ..Self::default()
        }
    }

    pub fn with_tls_version(mut self, tls_version: impl Into<String>) -> Self {
        self.tls_version = Some(tls_version.into());
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.primary.user_agent = user_agent.into();
        self
    }

    /// Insert an extra header, lowercasing the name. Last value wins.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.extra_headers
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }
}
