use std::fs;
use std::path::Path;

use crate::config::telemetry::LOG_LEVELS;
use crate::config::tls::SUPPORTED_ALPN;
use crate::config::Config;
use crate::error::{MuninnError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)
        .map_err(|e| MuninnError::Config(format!("Failed to read config file: {e}")))?;
    load_from_str(&txt)
}

pub fn load_from_str(txt: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(txt)
        .map_err(|e| MuninnError::Config(format!("Failed to parse config: {e}")))?;

    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    if let Some(tls) = &cfg.tls {
        if !Path::new(&tls.cert_path).exists() {
            return Err(MuninnError::Config(format!(
                "Certificate file not found: {}",
                tls.cert_path
            )));
        }
        if !Path::new(&tls.key_path).exists() {
            return Err(MuninnError::Config(format!("Key file not found: {}", tls.key_path)));
        }
        if let Some(proto) = tls
            .alpn
            .iter()
            .find(|p| !SUPPORTED_ALPN.contains(&p.as_str()))
        {
            return Err(MuninnError::Config(format!(
                "Unsupported ALPN protocol '{proto}', expected one of: {}",
                SUPPORTED_ALPN.join(", ")
            )));
        }
    }

    validate_log_level("logging.level", &cfg.logging.level)?;
    validate_log_level("telemetry.otel_log_level", &cfg.telemetry.otel_log_level)?;

    if cfg.telemetry.metrics_port == Some(cfg.listen.port()) {
        return Err(MuninnError::Config(format!(
            "telemetry.metrics_port ({}) must differ from the listen port",
            cfg.listen.port()
        )));
    }

    Ok(())
}

fn validate_log_level(field: &str, level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(MuninnError::Config(format!(
            "{field} '{level}' is invalid, expected one of: {}",
            LOG_LEVELS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() -> Result<()> {
        let cfg = load_from_str("")?;
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.listen.port(), 8080);
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = load_from_str("[logging]\nlevel = \"verbose\"\n");
        assert!(matches!(result, Err(MuninnError::Config(_))));
    }

    #[test]
    fn rejects_metrics_port_equal_to_listen_port() {
        let result = load_from_str("listen = \"127.0.0.1:9000\"\n[telemetry]\nmetrics_port = 9000\n");
        assert!(matches!(result, Err(MuninnError::Config(_))));
    }
}
