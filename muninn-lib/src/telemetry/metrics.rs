use opentelemetry::global;
use opentelemetry::metrics::{Counter, Gauge, Histogram, Meter, UpDownCounter};
use opentelemetry::KeyValue;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use prometheus::Registry;
use std::sync::Arc;

pub mod labels {
    pub const ERROR_TYPE: &str = "error_type";
    pub const PROTOCOL: &str = "protocol";
    pub const STATUS_CODE: &str = "status_code";
    pub const METHOD: &str = "method";
    pub const TLS_VERSION: &str = "tls_version";
    pub const CIPHER_SUITE: &str = "cipher_suite";
    pub const TIMEOUT_TYPE: &str = "timeout_type";
    pub const VERSION: &str = "version";
}

pub mod values {
    pub const TIMEOUT_TLS_HANDSHAKE: &str = "tls_handshake";
    pub const TIMEOUT_CONNECTION_HANDLING: &str = "connection_handling";
}

#[derive(Clone)]
pub struct Metrics {
    pub connections_total: Counter<u64>,
    pub connections_active: UpDownCounter<i64>,

    pub requests_total: Counter<u64>,
    pub requests_duration_seconds: Histogram<f64>,

    pub fingerprints_total: Counter<u64>,
    pub fingerprint_duration_seconds: Histogram<f64>,

    pub tls_handshakes_total: Counter<u64>,
    pub tls_handshake_duration_seconds: Histogram<f64>,
    pub tls_handshake_errors_total: Counter<u64>,

    pub timeouts_total: Counter<u64>,
    pub errors_total: Counter<u64>,

    pub build_info: Gauge<u64>,
}

impl Metrics {
    pub fn new(meter: Meter) -> Self {
        Self {
            connections_total: meter
                .u64_counter("muninn_connections_total")
                .with_description("Total number of connections accepted")
                .build(),
            connections_active: meter
                .i64_up_down_counter("muninn_connections_active")
                .with_description("Number of active connections")
                .build(),

            requests_total: meter
                .u64_counter("muninn_requests_total")
                .with_description("Total number of requests processed")
                .build(),
            requests_duration_seconds: meter
                .f64_histogram("muninn_requests_duration_seconds")
                .with_description("Request duration in seconds")
                .build(),

            fingerprints_total: meter
                .u64_counter("muninn_fingerprints_total")
                .with_description("Total number of fingerprints computed")
                .build(),
            fingerprint_duration_seconds: meter
                .f64_histogram("muninn_fingerprint_duration_seconds")
                .with_description("Attribute extraction and hashing duration in seconds")
                .build(),

            tls_handshakes_total: meter
                .u64_counter("muninn_tls_handshakes_total")
                .with_description("Total number of completed TLS handshakes")
                .build(),
            tls_handshake_duration_seconds: meter
                .f64_histogram("muninn_tls_handshake_duration_seconds")
                .with_description("TLS handshake duration in seconds")
                .build(),
            tls_handshake_errors_total: meter
                .u64_counter("muninn_tls_handshake_errors_total")
                .with_description("Total number of failed TLS handshakes")
                .build(),

            timeouts_total: meter
                .u64_counter("muninn_timeouts_total")
                .with_description("Total number of timeouts by type")
                .build(),
            errors_total: meter
                .u64_counter("muninn_errors_total")
                .with_description("Total number of request errors by type")
                .build(),

            build_info: meter
                .u64_gauge("muninn_build_info")
                .with_description("Build information")
                .build(),
        }
    }

    pub fn set_build_info(&self) {
        self.build_info.record(
            1,
            &[KeyValue::new(labels::VERSION, env!("CARGO_PKG_VERSION").to_string())],
        );
    }

    pub fn record_connection_opened(&self) {
        self.connections_total.add(1, &[]);
        self.connections_active.add(1, &[]);
    }

    pub fn record_connection_closed(&self) {
        self.connections_active.add(-1, &[]);
    }

    pub fn record_request(&self, method: &str, status_code: u16, protocol: &str, duration: f64) {
        let attrs = [
            KeyValue::new(labels::METHOD, method.to_string()),
            KeyValue::new(labels::STATUS_CODE, status_code.to_string()),
            KeyValue::new(labels::PROTOCOL, protocol.to_string()),
        ];
        self.requests_total.add(1, &attrs);
        self.requests_duration_seconds.record(duration, &attrs);
    }

    pub fn record_fingerprint(&self, protocol: &str, duration: f64) {
        let attrs = [KeyValue::new(labels::PROTOCOL, protocol.to_string())];
        self.fingerprints_total.add(1, &attrs);
        self.fingerprint_duration_seconds.record(duration, &attrs);
    }

    pub fn record_tls_handshake(&self, tls_version: &str, cipher_suite: &str, duration: f64) {
        let attrs = [
            KeyValue::new(labels::TLS_VERSION, tls_version.to_string()),
            KeyValue::new(labels::CIPHER_SUITE, cipher_suite.to_string()),
        ];
        self.tls_handshakes_total.add(1, &attrs);
        self.tls_handshake_duration_seconds.record(duration, &attrs);
    }

    pub fn record_tls_handshake_error(&self) {
        self.tls_handshake_errors_total.add(1, &[]);
    }

    pub fn record_timeout(&self, timeout_type: &str) {
        self.timeouts_total
            .add(1, &[KeyValue::new(labels::TIMEOUT_TYPE, timeout_type.to_string())]);
    }

    pub fn record_error(&self, error_type: &str) {
        self.errors_total
            .add(1, &[KeyValue::new(labels::ERROR_TYPE, error_type.to_string())]);
    }
}

pub fn init_metrics() -> Result<(Arc<Metrics>, Registry), Box<dyn std::error::Error + Send + Sync>>
{
    let registry = Registry::default();

    let exporter = opentelemetry_prometheus::exporter()
        .with_registry(registry.clone())
        .build()?;

    let meter_provider = SdkMeterProvider::builder().with_reader(exporter).build();

    global::set_meter_provider(meter_provider);

    let meter = global::meter("muninn");
    let metrics = Arc::new(Metrics::new(meter));

    metrics.set_build_info();

    Ok((metrics, registry))
}
