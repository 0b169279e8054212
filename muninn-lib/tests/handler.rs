mod helpers;

use std::sync::Arc;

use helpers::TestResult;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use muninn_lib::config::FingerprintConfig;
use muninn_lib::fingerprint::ConnectionInfo;
use muninn_lib::server::response::RespBody;
use muninn_lib::server::{respond, HttpError, RequestContext};
use serde_json::Value;

fn context() -> TestResult<RequestContext> {
    Ok(RequestContext::new(
        ConnectionInfo::plain("203.0.113.5:40000".parse()?),
        Arc::new(FingerprintConfig::default()),
        None,
    ))
}

async fn body_bytes(resp: http::Response<RespBody>) -> TestResult<Vec<u8>> {
    Ok(resp.into_body().collect().await?.to_bytes().to_vec())
}

async fn fingerprint_of(req: &Request<()>, ctx: &RequestContext) -> TestResult<String> {
    let resp = respond(req, ctx);
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(&body_bytes(resp).await?)?;
    Ok(json["fingerprint"].as_str().ok_or("fingerprint missing")?.to_string())
}

#[tokio::test]
async fn fingerprint_route_returns_json() -> TestResult<()> {
    let req = Request::builder()
        .uri("/fingerprint")
        .header("user-agent", "TestBot/1.0")
        .body(())?;

    let resp = respond(&req, &context()?);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").map(|v| v.as_bytes()),
        Some(&b"application/json"[..])
    );

    let json: Value = serde_json::from_slice(&body_bytes(resp).await?)?;
    assert_eq!(
        json["fingerprint"],
        "3082b1e713e205bf391f6f9cca4cbd43343c3affd8ffaf3ce21d9f2ee0cc854d"
    );
    let timestamp = json["timestamp"].as_str().ok_or("timestamp missing")?;
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
    Ok(())
}

#[tokio::test]
async fn any_method_is_fingerprinted() -> TestResult<()> {
    let ctx = context()?;
    let get = Request::builder().uri("/fingerprint").body(())?;
    let post = Request::builder().method("POST").uri("/fingerprint").body(())?;

    let get_fp = fingerprint_of(&get, &ctx).await?;
    let post_fp = fingerprint_of(&post, &ctx).await?;
    assert_eq!(get_fp.len(), 64);
    assert_ne!(get_fp, post_fp);
    Ok(())
}

#[tokio::test]
async fn identical_requests_share_a_fingerprint() -> TestResult<()> {
    let ctx = context()?;
    let build = || {
        Request::builder()
            .uri("/fingerprint?cache=bust")
            .header("user-agent", "TestBot/1.0")
            .header("accept-language", "en-US")
            .header("dnt", "1")
            .body(())
    };

    let first = fingerprint_of(&build()?, &ctx).await?;
    let second = fingerprint_of(&build()?, &ctx).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn other_paths_are_not_found_with_empty_body() -> TestResult<()> {
    let ctx = context()?;
    for path in ["/", "/fingerprint/", "/Fingerprint", "/favicon.ico"] {
        let req = Request::builder().uri(path).body(())?;
        let resp = respond(&req, &ctx);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        assert!(body_bytes(resp).await?.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn undecodable_header_fails_only_that_request() -> TestResult<()> {
    let ctx = context()?;
    let bad = Request::builder()
        .uri("/fingerprint")
        .header("accept-language", http::HeaderValue::from_bytes(b"en-\xe9")?)
        .body(())?;

    let resp = respond(&bad, &ctx);
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await?.is_empty());

    let good = Request::builder().uri("/fingerprint").body(())?;
    assert_eq!(fingerprint_of(&good, &ctx).await?.len(), 64);
    Ok(())
}

#[test]
fn error_type_mapping() {
    assert_eq!(HttpError::NotFound("/".to_string()).error_type(), "not_found");
    assert_eq!(
        HttpError::InvalidRequestAttributes("test".to_string()).error_type(),
        "invalid_request_attributes"
    );
    assert_eq!(
        HttpError::FailedToGenerateResponse("test".to_string()).error_type(),
        "response_generation"
    );
}

#[test]
fn status_code_conversion() {
    assert_eq!(StatusCode::from(HttpError::NotFound("/".to_string())), StatusCode::NOT_FOUND);
    assert_eq!(
        StatusCode::from(HttpError::InvalidRequestAttributes("test".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        StatusCode::from(HttpError::FailedToGenerateResponse("test".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
