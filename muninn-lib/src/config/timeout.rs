use serde::Deserialize;
use std::time::Duration;

/// Timeout configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimeoutConfig {
    /// Graceful shutdown timeout in seconds
    /// How long to wait for in-flight connections after the listener stops
    /// Default: 30
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_secs: u64,
    /// TLS handshake timeout in seconds
    /// Prevents slow clients from holding connections during handshake
    /// Default: 15 seconds
    #[serde(default = "default_tls_handshake_timeout")]
    pub tls_handshake_secs: u64,
    /// Total connection handling timeout in seconds
    /// 0 disables the limit
    /// Default: 300 seconds (5 minutes)
    #[serde(default = "default_connection_handling_timeout")]
    pub connection_handling_secs: u64,
    /// HTTP/1.1 keep-alive configuration
    ///
    /// HTTP/2 connections are always persistent, so this only affects HTTP/1.1.
    #[serde(default)]
    pub keep_alive: KeepAliveConfig,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            shutdown_secs: default_shutdown_timeout(),
            tls_handshake_secs: default_tls_handshake_timeout(),
            connection_handling_secs: default_connection_handling_timeout(),
            keep_alive: KeepAliveConfig::default(),
        }
    }
}

impl TimeoutConfig {
    pub fn shutdown(&self) -> Duration {
        Duration::from_secs(self.shutdown_secs)
    }

    pub fn tls_handshake(&self) -> Duration {
        Duration::from_secs(self.tls_handshake_secs)
    }

    /// `None` when `connection_handling_secs` is 0
    pub fn connection_handling(&self) -> Option<Duration> {
        (self.connection_handling_secs > 0).then(|| Duration::from_secs(self.connection_handling_secs))
    }
}

/// HTTP/1.1 keep-alive configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct KeepAliveConfig {
    /// Enable HTTP/1.1 keep-alive (persistent connections)
    /// Default: true
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self { enabled: default_true() }
    }
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_tls_handshake_timeout() -> u64 {
    15
}

fn default_connection_handling_timeout() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_connection_handling_limit() {
        let cfg = TimeoutConfig { connection_handling_secs: 0, ..TimeoutConfig::default() };
        assert_eq!(cfg.connection_handling(), None);
        assert_eq!(TimeoutConfig::default().connection_handling(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() -> Result<(), toml::de::Error> {
        let cfg: TimeoutConfig = toml::from_str("shutdown_secs = 2\n[keep_alive]\n")?;
        assert_eq!(cfg.shutdown(), Duration::from_secs(2));
        assert_eq!(cfg.tls_handshake(), Duration::from_secs(15));
        assert!(cfg.keep_alive.enabled);
        Ok(())
    }
}
