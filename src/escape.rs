//! Attribute-safe URL escaping with a scheme allow-list.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::EscapeError;

/// `%0d`/`%0a` escapes, removed to block header injection.
static ESCAPED_LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%0[ad]").expect("line break pattern is valid"));

/// A bare script name such as `index.php`, left relative.
static SCRIPT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9-]+?\.php").expect("script name pattern is valid"));

/// A literal colon or its numeric character reference.
static COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i):|&#0*58(?:[^0-9]|$)|&#x0*3a(?:[^0-9a-f]|$)").expect("colon pattern is valid")
});

/// An ampersand, optionally starting a character reference.
static AMPERSAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7};|#[xX][0-9a-fA-F]{1,6};|[A-Za-z][A-Za-z0-9]{1,31};)?")
        .expect("ampersand pattern is valid")
});

/// A numeric character reference inside a scheme candidate.
static NUMERIC_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:([0-9]{1,7})|[xX]([0-9a-fA-F]{1,6}));?").expect("reference pattern is valid")
});

/// Named references kept as-is. Anything else gets its '&' escaped.
const KEPT_NAMED_REFERENCES: &[&str] = &[
    "lt", "gt", "quot", "apos", "nbsp", "copy", "reg", "trade", "hellip", "ndash", "mdash",
    "lsquo", "rsquo", "ldquo", "rdquo", "laquo", "raquo", "euro", "pound", "yen", "cent", "sect",
    "deg", "middot", "times", "divide",
];

/// Escapes a URL for storage and for use inside an HTML attribute.
///
/// Leading whitespace is trimmed, spaces become `%20`, characters outside the
/// URL-safe set are removed (non-ASCII is kept), `%0d`/`%0a` are removed
/// unless the URL is a `mailto:`, `;//` becomes `://`, and a URL without a
/// scheme gets `http://` unless it starts with `/`, `#` or `?`. The scheme,
/// compared case-insensitively and after decoding character references,
/// must be in `protocols`. Finally bare `&` and `&amp;` become `&#038;` and
/// `'` becomes `&#039;`.
///
/// # Errors
///
/// Returns `EscapeError::Empty` if nothing is left and
/// `EscapeError::DisallowedScheme` if the scheme is not allowed.
///
/// # Examples
///
/// ```
/// use contact_uri::escape_url;
///
/// let allowed = ["https", "viber"];
/// assert_eq!(
///     escape_url("https://example.com/?a=1&b=<2>", &allowed).unwrap(),
///     "https://example.com/?a=1&#038;b=2"
/// );
/// assert!(escape_url("javascript:alert(1)", &allowed).is_err());
/// ```
pub fn escape_url<S: AsRef<str>>(url: &str, protocols: &[S]) -> Result<String, EscapeError> {
    escape_url_with(url, |scheme| {
        protocols.iter().any(|p| p.as_ref().eq_ignore_ascii_case(scheme))
    })
}

/// Escapes a URL like [`escape_url`], asking `allows` whether a scheme passes.
///
/// The scheme handed to `allows` is lowercased and has its character
/// references decoded.
///
/// # Errors
///
/// Same as [`escape_url`].
///
/// # Examples
///
/// ```
/// use contact_uri::escape_url_with;
///
/// let escaped = escape_url_with("WhatsApp://send?phone=1", |s| s.starts_with("whats"));
/// assert_eq!(escaped.unwrap(), "WhatsApp://send?phone=1");
/// assert!(escape_url_with("https://example.com", |_| false).is_err());
/// ```
pub fn escape_url_with<F>(url: &str, allows: F) -> Result<String, EscapeError>
where
    F: Fn(&str) -> bool,
{
    let url = url.trim_start().replace(' ', "%20");
    let mut url: String = url.chars().filter(|c| is_url_char(*c)).collect();
    if url.is_empty() {
        return Err(EscapeError::Empty);
    }

    if !starts_with_ignore_case(&url, "mailto:") {
        url = remove_escaped_line_breaks(url);
    }

    url = url.replace(";//", "://");

    if !url.contains(':') && !url.starts_with(['/', '#', '?']) && !SCRIPT_NAME.is_match(&url) {
        url.insert_str(0, "http://");
    }

    let relative = url.starts_with('/');
    match scheme_candidate(&url) {
        Some(scheme) if !relative && !allows(&scheme) => {
            return Err(EscapeError::DisallowedScheme { scheme });
        }
        _ => {}
    }

    Ok(escape_references(&url).replace('\'', "&#039;"))
}

/// Returns true for characters kept by [`escape_url`].
#[must_use]
pub const fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || !c.is_ascii()
        || matches!(
            c,
            '-' | '~'
                | '+'
                | '_'
                | '.'
                | '?'
                | '#'
                | '='
                | '!'
                | '&'
                | ';'
                | ','
                | '/'
                | ':'
                | '%'
                | '@'
                | '$'
                | '|'
                | '*'
                | '\''
                | '('
                | ')'
                | '['
                | ']'
        )
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn remove_escaped_line_breaks(mut url: String) -> String {
    // Removal can join a new escape, e.g. "%0%0dd"
    while ESCAPED_LINE_BREAK.is_match(&url) {
        url = ESCAPED_LINE_BREAK.replace_all(&url, "").into_owned();
    }
    url
}

/// Returns the normalized text before the first colon, if it can be a scheme.
fn scheme_candidate(url: &str) -> Option<String> {
    let colon = COLON.find(url)?;
    let head = &url[..colon.start()];
    if head.contains('/') {
        return None;
    }

    let decoded = NUMERIC_REFERENCE.replace_all(head, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(dec), _) => dec.as_str().parse().ok(),
            (_, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).ok(),
            _ => None,
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    Some(
        decoded
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase(),
    )
}

fn escape_references(url: &str) -> String {
    AMPERSAND
        .replace_all(url, |caps: &Captures| match caps.get(1) {
            None => "&#038;".to_string(),
            Some(reference) => {
                let reference = reference.as_str();
                let name = reference.trim_end_matches(';');
                if name == "amp" {
                    "&#038;".to_string()
                } else if reference.starts_with('#') || KEPT_NAMED_REFERENCES.contains(&name) {
                    format!("&{reference}")
                } else {
                    format!("&#038;{reference}")
                }
            }
        })
        .into_owned()
}
