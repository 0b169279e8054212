use thiserror::Error;

/// Errors raised while setting up or running the server
///
/// Fingerprint computation itself cannot fail; these cover configuration,
/// sockets, TLS material and response construction.
#[derive(Error, Debug)]
pub enum MuninnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TLS error: {0}")]
    Tls(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("No private key found in key file")]
    NoPrivateKey,
}

pub type Result<T> = std::result::Result<T, MuninnError>;
