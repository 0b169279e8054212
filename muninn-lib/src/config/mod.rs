mod fingerprinting;
mod loader;
mod root;
mod telemetry;
mod timeout;
mod tls;

pub use fingerprinting::FingerprintConfig;
pub use loader::{load_from_path, load_from_str, validate_config};
pub use root::Config;
pub use telemetry::{LoggingConfig, TelemetryConfig, LOG_LEVELS};
pub use timeout::{KeepAliveConfig, TimeoutConfig};
pub use tls::{TlsConfig, SUPPORTED_ALPN};
