mod helpers;

use helpers::{cleanup, create_dummy_test_cert, create_valid_test_cert, tmp_path, TestResult};
use muninn_lib::config::TlsConfig;
use muninn_lib::tls::build_rustls;
use muninn_lib::MuninnError;

fn tls_config(cert_path: String, key_path: String) -> TlsConfig {
    TlsConfig { cert_path, key_path, alpn: vec!["h2".to_string(), "http/1.1".to_string()] }
}

#[test]
fn builds_acceptor_from_valid_certificate() -> TestResult<()> {
    let (cert_path, key_path) = create_valid_test_cert()?;
    let config = tls_config(cert_path.display().to_string(), key_path.display().to_string());

    let result = build_rustls(&config);
    cleanup(&[&cert_path, &key_path]);

    assert!(result.is_ok(), "unexpected error: {:?}", result.err());
    Ok(())
}

#[test]
fn rejects_unparseable_certificate() -> TestResult<()> {
    let (cert_path, key_path) = create_dummy_test_cert()?;
    let config = tls_config(cert_path.display().to_string(), key_path.display().to_string());

    let result = build_rustls(&config);
    cleanup(&[&cert_path, &key_path]);

    assert!(matches!(result, Err(MuninnError::Tls(_))));
    Ok(())
}

#[test]
fn rejects_missing_certificate() {
    let config = tls_config("/nonexistent/cert.pem".to_string(), "/nonexistent/key.pem".to_string());
    let result = build_rustls(&config);
    assert!(matches!(result, Err(MuninnError::Tls(msg)) if msg.contains("read certificate")));
}

#[test]
fn rejects_key_file_without_key() -> TestResult<()> {
    let (cert_path, key_path) = create_valid_test_cert()?;
    let empty_key = tmp_path("empty.key");
    std::fs::write(&empty_key, b"")?;
    let config = tls_config(cert_path.display().to_string(), empty_key.display().to_string());

    let result = build_rustls(&config);
    cleanup(&[&cert_path, &key_path, &empty_key]);

    assert!(matches!(result, Err(MuninnError::NoPrivateKey)));
    Ok(())
}

#[test]
fn rejects_certificate_file_without_certificates() -> TestResult<()> {
    let (cert_path, key_path) = create_valid_test_cert()?;
    let empty_cert = tmp_path("empty.crt");
    std::fs::write(&empty_cert, b"")?;
    let config = tls_config(empty_cert.display().to_string(), key_path.display().to_string());

    let result = build_rustls(&config);
    cleanup(&[&cert_path, &key_path, &empty_cert]);

    assert!(matches!(result, Err(MuninnError::Tls(msg)) if msg.contains("No certificate")));
    Ok(())
}
