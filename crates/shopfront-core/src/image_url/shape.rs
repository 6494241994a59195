//! Lexical checks on raw image reference strings.

/// Schemes whose payload is inline (no authority part).
const INLINE_SCHEMES: &[&str] = &["data", "blob"];

/// Splits `scheme:rest` when the prefix is a valid RFC 3986 scheme token.
fn split_scheme(reference: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = reference.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, rest))
}

/// True for `scheme://...` and inline `data:`/`blob:` references.
///
/// `host:port/path` is not a scheme: it lacks the `//` authority marker.
pub(super) fn has_scheme(reference: &str) -> bool {
    match split_scheme(reference) {
        Some((scheme, rest)) => {
            rest.starts_with("//")
                || INLINE_SCHEMES
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(scheme))
        }
        None => false,
    }
}

/// True for http(s) URLs whose host is something other than `localhost`.
pub(super) fn is_external_http(reference: &str) -> bool {
    let Ok(parsed) = url::Url::parse(reference) else {
        return false;
    };
    matches!(parsed.scheme(), "http" | "https")
        && matches!(parsed.host_str(), Some(host) if !host.eq_ignore_ascii_case("localhost"))
}

/// Path after a `localhost:<port>/` segment, if the reference has one.
pub(super) fn localhost_path(reference: &str) -> Option<&str> {
    const MARKER: &str = "localhost:";
    let mut search_from = 0;
    while let Some(pos) = reference[search_from..].find(MARKER) {
        let after = search_from + pos + MARKER.len();
        let tail = &reference[after..];
        let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            if let Some(path) = tail[digits..].strip_prefix('/') {
                return Some(path);
            }
        }
        search_from = after;
    }
    None
}
