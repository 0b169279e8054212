use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use http::header::HOST;
use http::{HeaderMap, HeaderValue, Request, Version};
use ipnet::IpNet;
use thiserror::Error;

use super::attributes::{PrimaryHeaders, RequestAttributes};
use super::headers::{forwarded, primary, ALLOWED_HEADERS};
use crate::config::FingerprintConfig;

/// Transport-level facts about the connection a request arrived on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Remote socket address as seen by the listener
    pub peer: SocketAddr,
    /// Negotiated TLS label, `None` for plain TCP
    pub tls_version: Option<String>,
}

impl ConnectionInfo {
    pub fn plain(peer: SocketAddr) -> Self {
        Self { peer, tls_version: None }
    }

    pub fn tls(peer: SocketAddr, tls_version: impl Into<String>) -> Self {
        Self { peer, tls_version: Some(tls_version.into()) }
    }
}

/// A header value that is not valid UTF-8
///
/// Replacing the bytes would give distinct requests the same fingerprint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("header {0} is not valid UTF-8")]
    NonUtf8Header(String),
}

/// Collect everything the fingerprint engine needs from a request
pub fn extract_attributes<B>(
    req: &Request<B>,
    connection: &ConnectionInfo,
    config: &FingerprintConfig,
) -> Result<RequestAttributes, ExtractError> {
    let headers = req.headers();
    Ok(RequestAttributes {
        client_address: extract_client_address(headers, connection.peer, &config.trusted_proxies)?,
        method: req.method().as_str().to_string(),
        protocol_version: protocol_label(req.version()).to_string(),
        tls_version: connection.tls_version.clone(),
        port: request_host(req)?.and_then(|host| extract_port(&host)),
        primary: PrimaryHeaders {
            user_agent: header_string(headers, primary::USER_AGENT)?,
            accept: header_string(headers, primary::ACCEPT)?,
            accept_language: header_string(headers, primary::ACCEPT_LANGUAGE)?,
            accept_encoding: header_string(headers, primary::ACCEPT_ENCODING)?,
        },
        extra_headers: extract_headers(headers)?,
    })
}

/// Resolve the client address
///
/// Order: first entry of X-Forwarded-For, then X-Real-IP, then the peer IP.
/// With a non-empty `trusted_proxies` list the forwarding headers are only
/// honoured when the peer itself is inside one of those networks. IPv4 peers
/// accepted on a dual-stack socket are reported in dotted form.
pub fn extract_client_address(
    headers: &HeaderMap,
    peer: SocketAddr,
    trusted_proxies: &[IpNet],
) -> Result<String, ExtractError> {
    let peer_ip = peer.ip().to_canonical();
    if is_trusted_peer(peer_ip, trusted_proxies) {
        if let Some(xff) = non_empty_header(headers, forwarded::FOR)? {
            return Ok(xff.split(',').next().unwrap_or_default().trim().to_string());
        }
        if let Some(real_ip) = non_empty_header(headers, forwarded::REAL_IP)? {
            return Ok(real_ip.trim().to_string());
        }
    }
    Ok(peer_ip.to_string())
}

/// Returns true if forwarding headers from `peer` may be used
///
/// An empty list trusts every peer.
pub fn is_trusted_peer(peer: IpAddr, trusted_proxies: &[IpNet]) -> bool {
    trusted_proxies.is_empty() || trusted_proxies.iter().any(|net| net.contains(&peer))
}

/// Allow-listed headers keyed by lowercase name
///
/// Empty values and the four primary headers are left out.
pub fn extract_headers(headers: &HeaderMap) -> Result<HashMap<String, String>, ExtractError> {
    let mut extra = HashMap::new();
    for name in ALLOWED_HEADERS.iter().map(|name| name.to_ascii_lowercase()) {
        if primary::is_primary(&name) {
            continue;
        }
        if let Some(value) = non_empty_header(headers, &name)? {
            extra.insert(name, value);
        }
    }
    Ok(extra)
}

/// Host the request was addressed to
///
/// HTTP/2 carries it in the `:authority` pseudo-header (exposed by hyper as the
/// URI authority); HTTP/1 in the `Host` header.
pub fn request_host<B>(req: &Request<B>) -> Result<Option<String>, ExtractError> {
    if let Some(authority) = req.uri().authority() {
        return Ok(Some(authority.as_str().to_string()));
    }
    req.headers()
        .get(HOST)
        .map(|value| value_to_string(HOST.as_str(), value))
        .transpose()
}

/// Port portion of a `host[:port]` string
///
/// Only attempted when the host contains a colon. Bracketed IPv6 literals are
/// supported; a bare IPv6 literal, a malformed host or an empty port yields `None`.
pub fn extract_port(host: &str) -> Option<String> {
    if !host.contains(':') {
        return None;
    }
    let port = if let Some(rest) = host.strip_prefix('[') {
        let (_, after_bracket) = rest.split_once(']')?;
        after_bracket.strip_prefix(':')?
    } else {
        let (name, port) = host.rsplit_once(':')?;
        if name.contains(':') || name.contains('[') || name.contains(']') {
            return None;
        }
        port
    };
    if port.is_empty() || port.contains('[') || port.contains(']') {
        return None;
    }
    Some(port.to_string())
}

/// Request-line protocol as written on the wire
pub fn protocol_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "unknown",
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Result<String, ExtractError> {
    Ok(non_empty_header(headers, name)?.unwrap_or_default())
}

fn non_empty_header(headers: &HeaderMap, name: &str) -> Result<Option<String>, ExtractError> {
    let value = headers
        .get(name)
        .map(|value| value_to_string(name, value))
        .transpose()?;
    Ok(value.filter(|v| !v.is_empty()))
}

// `HeaderValue::to_str` only admits visible ASCII; any valid UTF-8 is kept as is
fn value_to_string(name: &str, value: &HeaderValue) -> Result<String, ExtractError> {
    std::str::from_utf8(value.as_bytes())
        .map(str::to_string)
        .map_err(|_| ExtractError::NonUtf8Header(name.to_string()))
}
