/// Header names consulted when resolving the client address
///
/// These are read by the extractor before the peer socket address is used.
pub mod forwarded {
    /// Header name for X-Forwarded-For
    ///
    /// Comma-separated proxy chain. Only the first (left-most) entry is used.
    pub const FOR: &str = "x-forwarded-for";

    /// Header name for X-Real-IP
    ///
    /// Single client address set by a reverse proxy.
    pub const REAL_IP: &str = "x-real-ip";
}

/// Primary negotiation headers
///
/// These always occupy a fixed position in the fingerprint, so they are never
/// emitted a second time from the allow-listed tail.
pub mod primary {
    pub const USER_AGENT: &str = "user-agent";
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_LANGUAGE: &str = "accept-language";
    pub const ACCEPT_ENCODING: &str = "accept-encoding";

    /// All primary header names, lowercase
    pub const ALL: [&str; 4] = [USER_AGENT, ACCEPT, ACCEPT_LANGUAGE, ACCEPT_ENCODING];

    /// Returns true if `name` (lowercase) is one of the primary headers
    pub fn is_primary(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Headers that contribute to the fingerprint
///
/// Membership is the contract, order is irrelevant. Names are stored in their
/// conventional casing; lookups on `HeaderMap` are case-insensitive and the
/// extractor stores values under the lowercase name.
pub const ALLOWED_HEADERS: &[&str] = &[
    "User-Agent",
    "Accept",
    "Accept-Language",
    "Accept-Encoding",
    "Accept-Charset",
    "Connection",
    "Upgrade-Insecure-Requests",
    "Sec-Fetch-Site",
    "Sec-Fetch-Mode",
    "Sec-Fetch-User",
    "Sec-Fetch-Dest",
    "Sec-Ch-Ua",
    "Sec-Ch-Ua-Mobile",
    "Sec-Ch-Ua-Platform",
    "Sec-Ch-Ua-Platform-Version",
    "Sec-Ch-Ua-Arch",
    "Sec-Ch-Ua-Model",
    "Sec-Ch-Ua-Bitness",
    "Sec-Ch-Ua-Full-Version",
    "Sec-Ch-Ua-Full-Version-List",
    "Sec-Ch-Ua-Wow64",
    "Sec-Ch-Viewport-Width",
    "Sec-Ch-Viewport-Height",
    "Sec-Ch-Dpr",
    "Sec-Ch-Device-Memory",
    "Sec-Ch-Prefers-Color-Scheme",
    "Sec-Ch-Prefers-Reduced-Motion",
    "Cache-Control",
    "Pragma",
    "DNT",
    "Referer",
    "Origin",
    "Host",
    "Authorization",
    "X-Requested-With",
    "Content-Type",
    "If-None-Match",
    "If-Modified-Since",
    "X-Forwarded-Proto",
    "X-Forwarded-Port",
    "CF-Ray",
    "CF-IPCountry",
    "CF-Connecting-IP",
    "True-Client-IP",
    "X-Client-IP",
    "X-Cluster-Client-IP",
    "Forwarded",
    "Via",
    "X-Original-Forwarded-For",
    "CloudFront-Viewer-Country",
    "X-Amzn-Trace-Id",
    "Accept-Datetime",
    "TE",
    "Expect",
    "Max-Forwards",
    "Range",
    "Warning",
    "Date",
    "From",
    "Save-Data",
    "Viewport-Width",
    "Width",
    "DPR",
    "Device-Memory",
    "ECT",
    "RTT",
    "Downlink",
];

/// Returns true if `name` is on the allow-list (case-insensitive)
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}
