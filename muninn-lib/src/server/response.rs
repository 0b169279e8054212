use bytes::Bytes;
use http::StatusCode;
use http_body_util::{combinators::BoxBody, BodyExt, Empty, Full};
use hyper::Response;
use serde::Serialize;

use crate::fingerprint::Fingerprint;
use crate::server::http_result::{HttpError, HttpResult};

pub type RespBody = BoxBody<Bytes, hyper::Error>;

/// JSON body returned by the fingerprint route
#[derive(Debug, Serialize)]
pub struct FingerprintBody<'a> {
    pub fingerprint: &'a Fingerprint,
    pub timestamp: &'a str,
}

pub fn full_body(bytes: impl Into<Bytes>) -> RespBody {
    Full::new(bytes.into())
        .map_err(|never| match never {})
        .boxed()
}

pub fn empty_body() -> RespBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

/// Bodyless response with the given status, cannot fail
pub fn empty_response(status: StatusCode) -> Response<RespBody> {
    let mut resp = Response::new(empty_body());
    *resp.status_mut() = status;
    resp
}

/// `200 OK` with `{"fingerprint": ..., "timestamp": ...}`
pub fn fingerprint_response(
    fingerprint: &Fingerprint,
    timestamp: &str,
) -> HttpResult<Response<RespBody>> {
    let body = serde_json::to_vec(&FingerprintBody { fingerprint, timestamp })
        .map_err(|e| HttpError::FailedToGenerateResponse(format!("serialize body: {e}")))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(full_body(body))
        .map_err(|e| HttpError::FailedToGenerateResponse(e.to_string()))
}

/// Build HTTP response with status code of 4xx and 5xx
pub fn synthetic_error_response(error: HttpError) -> Response<RespBody> {
    empty_response(StatusCode::from(error))
}
