use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::attributes::RequestAttributes;
use super::headers::primary;

/// Separator placed between fingerprint parts
pub const PART_SEPARATOR: &str = "|";

/// Lowercase hex SHA-256 digest identifying a client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of the hex encoded digest
    pub const LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the ordered `key:value` parts for a request
///
/// Fixed prefix first (`ip`, `method`, `protocol`, optional `tls` and `port`,
/// then the four primary headers even when empty), followed by the extra
/// headers sorted byte-wise by name.
pub fn fingerprint_parts(attrs: &RequestAttributes) -> Vec<String> {
    let mut parts = Vec::with_capacity(attrs.extra_headers.len().saturating_add(9));

    parts.push(format!("ip:{}", attrs.client_address));
    parts.push(format!("method:{}", attrs.method));
    parts.push(format!("protocol:{}", attrs.protocol_version));
    if let Some(tls) = present(attrs.tls_version.as_deref()) {
        parts.push(format!("tls:{tls}"));
    }
    if let Some(port) = present(attrs.port.as_deref()) {
        parts.push(format!("port:{port}"));
    }

    parts.push(format!("ua:{}", attrs.primary.user_agent));
    parts.push(format!("accept:{}", attrs.primary.accept));
    parts.push(format!("accept-lang:{}", attrs.primary.accept_language));
    parts.push(format!("accept-enc:{}", attrs.primary.accept_encoding));

    let mut extra: Vec<(&String, &String)> = attrs
        .extra_headers
        .iter()
        .filter(|(name, _)| !primary::is_primary(name))
        .collect();
    extra.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    parts.extend(extra.into_iter().map(|(name, value)| format!("{name}:{value}")));
    parts
}

/// The string that gets hashed: all parts joined with `|`
pub fn canonical_string(attrs: &RequestAttributes) -> String {
    fingerprint_parts(attrs).join(PART_SEPARATOR)
}

/// Compute the fingerprint of a request
///
/// Pure and infallible: the same attributes always give the same digest.
pub fn compute_fingerprint(attrs: &RequestAttributes) -> Fingerprint {
    let canonical = canonical_string(attrs);
    let digest = Sha256::digest(canonical.as_bytes());
    Fingerprint(hex::encode(digest))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
