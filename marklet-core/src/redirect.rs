//! Redirect-target resolution
//!
//! Filter requests bounce the visitor back to the page they came from. The
//! referer is reduced to its path+query so the `Location` header never
//! repeats a scheme or host the client already knows.

use url::Url;

/// Fallback target when the request carries no usable referer.
pub const DEFAULT_REDIRECT: &str = "./";

/// Resolve the redirect target for a filter request.
pub fn resolve_redirect(referer: Option<&str>) -> String {
    match referer {
        Some(referer) => referer_path_and_query(referer),
        None => DEFAULT_REDIRECT.to_string(),
    }
}

/// Strip scheme and host from a referer URL, keeping path and query verbatim.
fn referer_path_and_query(referer: &str) -> String {
    match Url::parse(referer) {
        Ok(url) => {
            let mut target = url.path().to_string();
            if let Some(query) = url.query() {
                target.push('?');
                target.push_str(query);
            }
            target
        }
        // Relative or garbage referers are not worth reconstructing.
        Err(_) => DEFAULT_REDIRECT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_path_and_query_of_referer() {
        assert_eq!(
            resolve_redirect(Some("http://shaarli/subfolder/controller/?searchtag=abc")),
            "/subfolder/controller/?searchtag=abc"
        );
    }

    #[test]
    fn drops_scheme_host_and_port() {
        assert_eq!(
            resolve_redirect(Some("https://example.com:8443/tags?sort=usage")),
            "/tags?sort=usage"
        );
    }

    #[test]
    fn referer_without_query_yields_bare_path() {
        assert_eq!(resolve_redirect(Some("http://example.com/daily")), "/daily");
    }

    #[test]
    fn bare_host_resolves_to_root() {
        assert_eq!(resolve_redirect(Some("http://example.com")), "/");
    }

    #[test]
    fn missing_referer_falls_back() {
        assert_eq!(resolve_redirect(None), DEFAULT_REDIRECT);
    }

    #[test]
    fn unparseable_referer_falls_back() {
        assert_eq!(resolve_redirect(Some("/relative/only")), DEFAULT_REDIRECT);
        assert_eq!(resolve_redirect(Some("not a url")), DEFAULT_REDIRECT);
    }
}
