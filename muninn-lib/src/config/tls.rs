use serde::Deserialize;

/// ALPN protocol identifiers the server can speak
pub const SUPPORTED_ALPN: [&str; 2] = ["h2", "http/1.1"];

/// TLS termination configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TlsConfig {
    /// Path to TLS certificate file (PEM format)
    /// File must exist and be readable at startup
    pub cert_path: String,
    /// Path to TLS private key file (PEM format)
    /// File must exist and be readable at startup
    pub key_path: String,
    /// Application-Layer Protocol Negotiation (ALPN) protocols
    /// Allowed values: "h2", "http/1.1"
    /// Default: ["h2", "http/1.1"]
    #[serde(default = "default_alpn")]
    pub alpn: Vec<String>,
}

fn default_alpn() -> Vec<String> {
    SUPPORTED_ALPN.iter().map(|s| s.to_string()).collect()
}
