#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod server;
pub mod telemetry;
pub mod tls;

pub use config::{load_from_path, Config, FingerprintConfig, TlsConfig};
pub use error::{MuninnError, Result};
pub use fingerprint::{compute_fingerprint, ConnectionInfo, Fingerprint, RequestAttributes};
pub use server::{run, serve};
pub use tls::build_rustls;
