//! Slug resolution from the navigation context, and the reverse: embedding
//! the active slug back into the location.

use url::Url;
use url::form_urlencoded;

/// Query parameter carrying the active employee
pub const EMPLOYEE_PARAM: &str = "employee";

/// Used when neither the location nor the configuration names anyone
pub const FALLBACK_SLUG: &str = "marclevy";

/// Path segment meaning "site root", never a slug
pub const INDEX_PAGE: &str = "index.html";

const PAGE_EXTENSION: &str = ".html";

/// Resolve the slug of the employee the location asks for.
///
/// Precedence: `employee` query parameter, then the last non-empty path
/// segment (minus `.html`, ignoring `index.html`), then `default_slug`, then
/// [`FALLBACK_SLUG`]. The result is always lower-case.
pub fn resolve_slug(location: &Url, default_slug: Option<&str>) -> String {
    query_slug(location)
        .or_else(|| path_slug(location))
        .or_else(|| {
            default_slug
                .map(|slug| slug.trim().to_lowercase())
                .filter(|slug| !slug.is_empty())
        })
        .unwrap_or_else(|| FALLBACK_SLUG.to_string())
}

/// First non-empty `employee` query value, lower-cased
pub fn query_slug(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == EMPLOYEE_PARAM)
        .map(|(_, value)| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Slug named by the last non-empty path segment
pub fn path_slug(location: &Url) -> Option<String> {
    let segment = location.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let lower = segment.to_lowercase();

    if lower == INDEX_PAGE {
        return None;
    }

    let slug = lower.strip_suffix(PAGE_EXTENSION).unwrap_or(&lower).trim();
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Copy of `location` whose `employee` parameter is `slug`.
///
/// Other query pairs keep their original order and raw encoding; any existing
/// `employee` pairs are dropped and a single one is appended. The fragment is
/// not carried over.
pub fn url_with_slug(location: &Url, slug: &str) -> Url {
    let mut parts: Vec<String> = location
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|part| !part.is_empty())
        .filter(|part| part.split('=').next() != Some(EMPLOYEE_PARAM))
        .map(str::to_string)
        .collect();

    let encoded: String = form_urlencoded::byte_serialize(slug.as_bytes()).collect();
    parts.push(format!("{EMPLOYEE_PARAM}={encoded}"));

    let mut url = location.clone();
    url.set_query(Some(&parts.join("&")));
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_query_parameter_wins() {
        let location = url("https://people.example.com/bo.html?employee=Amy");
        assert_eq!(resolve_slug(&location, Some("carl")), "amy");
    }

    #[test]
    fn test_path_segment_when_no_query() {
        assert_eq!(resolve_slug(&url("https://people.example.com/bo.html"), None), "bo");
        assert_eq!(resolve_slug(&url("https://people.example.com/team/Carl/"), None), "carl");
        assert_eq!(resolve_slug(&url("https://people.example.com/team/dee.HTML"), None), "dee");
    }

    #[test]
    fn test_default_for_root_and_index() {
        assert_eq!(resolve_slug(&url("https://people.example.com/"), Some("Carl")), "carl");
        assert_eq!(resolve_slug(&url("https://people.example.com/index.html"), Some("carl")), "carl");
        assert_eq!(resolve_slug(&url("https://people.example.com/"), None), FALLBACK_SLUG);
        assert_eq!(resolve_slug(&url("https://people.example.com/"), Some("  ")), FALLBACK_SLUG);
    }

    #[test]
    fn test_empty_query_value_is_ignored() {
        let location = url("https://people.example.com/bo.html?employee=&tab=about");
        assert_eq!(resolve_slug(&location, None), "bo");
    }

    #[test]
    fn test_bare_extension_falls_through() {
        assert_eq!(path_slug(&url("https://people.example.com/.html")), None);
    }

    #[test]
    fn test_url_with_slug_replaces_only_employee() {
        let location = url("https://people.example.com/index.html?tab=about&employee=amy&q=a%20b#top");
        let rewritten = url_with_slug(&location, "bo");

        assert_eq!(
            rewritten.as_str(),
            "https://people.example.com/index.html?tab=about&q=a%20b&employee=bo"
        );
    }

    #[test]
    fn test_url_with_slug_adds_query_when_missing() {
        let rewritten = url_with_slug(&url("https://people.example.com/"), "amy");
        assert_eq!(rewritten.as_str(), "https://people.example.com/?employee=amy");
        assert_eq!(query_slug(&rewritten).as_deref(), Some("amy"));
    }
}
