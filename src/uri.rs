//! Component splitting for contact URIs.

/// The components of a URI, split per RFC 3986 Appendix B.
///
/// Splitting never fails and never validates component contents; it only
/// records which components are present. Empty host and path count as
/// absent, while an empty query or fragment after its delimiter is present.
///
/// # Examples
///
/// ```
/// use contact_uri::UriParts;
///
/// let parts = UriParts::split("skype:johndoe123?call");
/// assert_eq!(parts.scheme(), Some("skype"));
/// assert_eq!(parts.path(), Some("johndoe123"));
/// assert_eq!(parts.query(), Some("call"));
///
/// let parts = UriParts::split("https://user@example.com:8443/contact?x=1#top");
/// assert_eq!(parts.host(), Some("example.com"));
/// assert_eq!(parts.path(), Some("/contact"));
/// assert_eq!(parts.fragment(), Some("top"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UriParts<'a> {
    scheme: Option<&'a str>,
    host: Option<&'a str>,
    path: Option<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> UriParts<'a> {
    /// Splits a URI into its components.
    #[must_use]
    pub fn split(input: &'a str) -> Self {
        let (rest, fragment) = Self::split_fragment(input);
        let (rest, query) = Self::split_query(rest);
        let (scheme, rest) = Self::split_scheme(rest);
        let (host, path) = Self::split_authority(rest);

        Self {
            scheme,
            host,
            path: (!path.is_empty()).then_some(path),
            query,
            fragment,
        }
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub const fn scheme(&self) -> Option<&'a str> {
        self.scheme
    }

    /// Returns the host, without user info or port, if present.
    #[must_use]
    pub const fn host(&self) -> Option<&'a str> {
        self.host
    }

    /// Returns the path, if non-empty.
    #[must_use]
    pub const fn path(&self) -> Option<&'a str> {
        self.path
    }

    /// Returns the query (without leading '?'), if present.
    #[must_use]
    pub const fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Returns the fragment (without leading '#'), if present.
    #[must_use]
    pub const fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Returns true if a host or a path is present.
    #[must_use]
    pub const fn has_target(&self) -> bool {
        self.host.is_some() || self.path.is_some()
    }

    /// Returns true if the string is a syntactically valid RFC 3986 scheme.
    #[must_use]
    pub fn is_valid_scheme(scheme: &str) -> bool {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    }

    fn split_fragment(input: &str) -> (&str, Option<&str>) {
        match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        }
    }

    fn split_query(input: &str) -> (&str, Option<&str>) {
        match input.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (input, None),
        }
    }

    fn split_scheme(input: &str) -> (Option<&str>, &str) {
        match input.split_once(':') {
            Some((scheme, rest)) if Self::is_valid_scheme(scheme) => (Some(scheme), rest),
            _ => (None, input),
        }
    }

    fn split_authority(input: &str) -> (Option<&str>, &str) {
        let Some(rest) = input.strip_prefix("//") else {
            return (None, input);
        };

        let end = rest.find('/').unwrap_or(rest.len());
        let (authority, path) = rest.split_at(end);

        // Drop user info, then port
        let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = if host_port.starts_with('[') {
            host_port
                .find(']')
                .map_or(host_port, |close| &host_port[..=close])
        } else {
            host_port.split_once(':').map_or(host_port, |(h, _)| h)
        };

        ((!host.is_empty()).then_some(host), path)
    }
}
