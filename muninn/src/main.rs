#![forbid(unsafe_code)]

use clap::Parser;
use muninn_lib::config::{load_from_path, Config};
use muninn_lib::server;
use muninn_lib::telemetry::{init_metrics, init_tracing, start_observability_server};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Muninn HTTP client fingerprinting service")]
struct Cli {
    /// Path to configuration TOML file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE", env = "MUNINN_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let cfg = match cli.config.as_deref().map(load_from_path).transpose() {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) =
        init_tracing(&cfg.logging.level, cfg.logging.show_target, &cfg.telemetry.otel_log_level)
    {
        eprintln!("failed to initialize tracing: {err}");
        std::process::exit(1);
    }

    info!(
        listen = ?cfg.listen,
        tls = cfg.tls.is_some(),
        trusted_proxies = cfg.fingerprint.trusted_proxies.len(),
        "configuration loaded"
    );

    let metrics = match cfg.telemetry.metrics_port {
        Some(port) => start_metrics(port),
        None => None,
    };

    let cfg: Arc<Config> = Arc::new(cfg);
    if let Err(err) = server::run(cfg, metrics).await {
        error!(%err, "fingerprint server exited with error");
        std::process::exit(1);
    }
}

fn start_metrics(port: u16) -> Option<Arc<muninn_lib::telemetry::Metrics>> {
    let (metrics, registry) = match init_metrics() {
        Ok(pair) => pair,
        Err(err) => {
            warn!(%err, "failed to initialize metrics, continuing without them");
            return None;
        }
    };

    let shutdown = match server::shutdown_signal() {
        Ok(shutdown) => shutdown,
        Err(err) => {
            warn!(%err, "failed to install signal handlers for observability server");
            return None;
        }
    };

    tokio::spawn(async move {
        if let Err(err) = start_observability_server(port, registry, shutdown).await {
            error!(%err, port, "observability server exited with error");
        }
    });
    Some(metrics)
}
