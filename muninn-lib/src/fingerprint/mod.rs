pub mod attributes;
pub mod engine;
pub mod extractor;
pub mod headers;

pub use attributes::{PrimaryHeaders, RequestAttributes};
pub use engine::{canonical_string, compute_fingerprint, fingerprint_parts, Fingerprint};
pub use extractor::{
    extract_attributes, extract_client_address, extract_headers, extract_port, protocol_label,
    request_host, ConnectionInfo, ExtractError,
};
pub use headers::{forwarded, primary, ALLOWED_HEADERS};
