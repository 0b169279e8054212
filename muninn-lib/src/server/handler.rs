use chrono::{SecondsFormat, Utc};
use hyper::{Request, Response};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::fingerprint::{compute_fingerprint, extract_attributes, protocol_label};
use crate::server::context::RequestContext;
use crate::server::http_result::{HttpError, HttpResult};
use crate::server::response::{fingerprint_response, synthetic_error_response, RespBody};
use crate::server::routes::{pick_route, Route};

/// Answer a request, turning failures into synthetic error responses
///
/// Records request metrics when enabled.
pub fn respond<B>(req: &Request<B>, ctx: &RequestContext) -> Response<RespBody> {
    let start = Instant::now();
    let response = match handle_request(req, ctx) {
        Ok(resp) => resp,
        Err(e) => {
            match &e {
                HttpError::NotFound(_) => debug!(peer = %ctx.connection.peer, "{e}"),
                HttpError::InvalidRequestAttributes(_) | HttpError::FailedToGenerateResponse(_) => {
                    warn!(peer = %ctx.connection.peer, error = %e, "request failed")
                }
            }
            if let Some(ref m) = ctx.metrics {
                m.record_error(e.error_type());
            }
            synthetic_error_response(e)
        }
    };

    if let Some(ref m) = ctx.metrics {
        m.record_request(
            req.method().as_str(),
            response.status().as_u16(),
            protocol_label(req.version()),
            start.elapsed().as_secs_f64(),
        );
    }
    response
}

/// Route a request
pub fn handle_request<B>(req: &Request<B>, ctx: &RequestContext) -> HttpResult<Response<RespBody>> {
    match pick_route(req.uri().path()) {
        Some(Route::Fingerprint) => handle_fingerprint(req, ctx),
        None => Err(HttpError::NotFound(req.uri().path().to_string())),
    }
}

/// Compute, log and return the fingerprint of the request
pub fn handle_fingerprint<B>(
    req: &Request<B>,
    ctx: &RequestContext,
) -> HttpResult<Response<RespBody>> {
    let start = Instant::now();
    let attributes = extract_attributes(req, &ctx.connection, &ctx.fingerprint)?;
    let fingerprint = compute_fingerprint(&attributes);
    if let Some(ref m) = ctx.metrics {
        m.record_fingerprint(&attributes.protocol_version, start.elapsed().as_secs_f64());
    }

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    info!(
        %timestamp,
        %fingerprint,
        client_ip = %attributes.client_address,
        user_agent = %attributes.primary.user_agent,
        "fingerprint computed"
    );
    debug!(
        method = %attributes.method,
        protocol = %attributes.protocol_version,
        tls = ?attributes.tls_version,
        port = ?attributes.port,
        extra_headers = attributes.extra_headers.len(),
        "fingerprint attributes"
    );

    fingerprint_response(&fingerprint, &timestamp)
}

