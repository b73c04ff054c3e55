//! Utility functions and helpers.

pub mod color;
pub mod http;
pub mod text;

use url::Url;

/// Resolve a relative endpoint path against the catalog base URL.
///
/// The base is treated as a directory even without a trailing slash, so
/// `https://host/api/v1` + `degrees` gives `https://host/api/v1/degrees`.
pub fn endpoint(base: &Url, path: &str) -> crate::error::Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let base = Url::parse("https://example.com/api/v1").unwrap();
        assert_eq!(
            endpoint(&base, "degrees").unwrap().as_str(),
            "https://example.com/api/v1/degrees"
        );

        let base = Url::parse("https://example.com/api/v1/").unwrap();
        assert_eq!(
            endpoint(&base, "/courses/42/schedule").unwrap().as_str(),
            "https://example.com/api/v1/courses/42/schedule"
        );
    }
}
