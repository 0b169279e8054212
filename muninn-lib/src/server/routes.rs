/// Path of the only application route
pub const FINGERPRINT_PATH: &str = "/fingerprint";

/// Routes served by the fingerprint listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Fingerprint,
}

/// Exact-path route lookup. Methods are not part of the match.
pub fn pick_route(path: &str) -> Option<Route> {
    match path {
        FINGERPRINT_PATH => Some(Route::Fingerprint),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_path_only() {
        assert_eq!(pick_route("/fingerprint"), Some(Route::Fingerprint));
        assert_eq!(pick_route("/fingerprint/"), None);
        assert_eq!(pick_route("/fingerprints"), None);
        assert_eq!(pick_route("/"), None);
    }
}
