//! URL Utility Functions
//!
//! Validation and resolution of page URLs plus the string-level helpers
//! used for story-card domains and image labels.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve an `href`/`src` value against the page URL.
///
/// Fragment-only references and special schemes are returned unchanged so
/// in-page navigation targets survive. Without a base the value is only
/// trimmed.
#[must_use]
pub fn resolve(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return href.to_string();
    }

    // Preserve special URLs unchanged
    if href.starts_with("data:")
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return href.to_string();
    }

    let (is_abs, _) = is_absolute_url(href);
    if is_abs {
        return href.to_string();
    }

    match base {
        Some(base) => base
            .join(href)
            .map_or_else(|_| href.to_string(), |resolved| resolved.to_string()),
        None => href.to_string(),
    }
}

/// Domain of a URL for display: scheme, path and a leading `www.` removed.
///
/// Returns an empty string for relative references.
///
/// # Examples
///
/// ```
/// use page_tree::url_utils::extract_domain;
///
/// assert_eq!(extract_domain("https://www.example.com/a/b?c=1"), "example.com");
/// assert_eq!(extract_domain("/relative/path"), "");
/// ```
#[must_use]
pub fn extract_domain(url: &str) -> String {
    let url = url.trim();
    let Some((_, rest)) = url.split_once("://") else {
        if let Some(rest) = url.strip_prefix("//") {
            return host_part(rest);
        }
        return String::new();
    };
    host_part(rest)
}

fn host_part(rest: &str) -> String {
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    host.strip_prefix("www.").map_or(host.clone(), str::to_string)
}

/// Extract the filename from a URL path.
///
/// Strips query parameters and fragment identifiers, then returns the last
/// path segment.
///
/// # Examples
///
/// ```
/// use page_tree::url_utils::extract_filename;
///
/// assert_eq!(extract_filename("https://example.com/images/photo.jpg"), "photo.jpg");
/// assert_eq!(extract_filename("/path/to/image.png?w=800"), "image.png");
/// assert_eq!(extract_filename("https://example.com/"), "");
/// ```
#[must_use]
pub fn extract_filename(url: &str) -> String {
    let url = url.trim();

    if url.is_empty() {
        return String::new();
    }

    // Strip query parameters
    let without_query = url.split('?').next().unwrap_or(url);

    // Strip fragment identifiers
    let without_fragment = without_query.split('#').next().unwrap_or(without_query);

    // Protocol-only URLs have no path segment
    let path = without_fragment
        .split_once("://")
        .map_or(without_fragment, |(_, rest)| rest.split_once('/').map_or("", |(_, p)| p));

    let filename = path.rsplit('/').next().unwrap_or("").trim();

    if filename.is_empty() || filename == "." || filename == ".." {
        return String::new();
    }

    filename.to_string()
}

/// Filename with its extension removed, used as an image label fallback.
#[must_use]
pub fn filename_stem(url: &str) -> String {
    let filename = extract_filename(url);
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url_valid() {
        let (ok, url) = is_absolute_url("https://example.com/page");
        assert!(ok);
        assert!(url.is_some());
    }

    #[test]
    fn test_is_absolute_url_invalid() {
        assert!(!is_absolute_url("/relative").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_resolve_relative() {
        let base = Url::parse("https://example.com/news/index.html").ok();
        assert_eq!(resolve("story.html", base.as_ref()), "https://example.com/news/story.html");
        assert_eq!(resolve("/about", base.as_ref()), "https://example.com/about");
    }

    #[test]
    fn test_resolve_keeps_fragments_and_special_schemes() {
        let base = Url::parse("https://example.com/").ok();
        assert_eq!(resolve("#top", base.as_ref()), "#top");
        assert_eq!(resolve("mailto:a@b.c", base.as_ref()), "mailto:a@b.c");
        assert_eq!(resolve("javascript:void(0)", base.as_ref()), "javascript:void(0)");
    }

    #[test]
    fn test_resolve_without_base() {
        assert_eq!(resolve("  /about ", None), "/about");
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://www.example.com/path"), "example.com");
        assert_eq!(extract_domain("http://news.example.org?x=1"), "news.example.org");
        assert_eq!(extract_domain("//cdn.example.net/lib.js"), "cdn.example.net");
        assert_eq!(extract_domain("item?id=1"), "");
    }

    #[test]
    fn test_extract_filename_basic() {
        assert_eq!(extract_filename("https://example.com/a/photo.jpg"), "photo.jpg");
        assert_eq!(extract_filename("photo.jpg#frag"), "photo.jpg");
        assert_eq!(extract_filename("https://example.com"), "");
    }

    #[test]
    fn test_filename_stem() {
        assert_eq!(filename_stem("/img/sunset-beach.large.png?v=2"), "sunset-beach.large");
        assert_eq!(filename_stem("/img/README"), "README");
        assert_eq!(filename_stem("https://example.com/"), "");
    }
}
