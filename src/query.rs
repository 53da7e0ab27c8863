//! Query parameters attached to contact URIs.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::NO_LINK;
use crate::error::ParameterError;
use crate::param::ParameterKind;
use crate::percent::percent_encode_component;
use crate::scheme::ContactScheme;

/// Sanitized query parameters for a contact URI.
///
/// Values are sanitized by kind on insert and dropped when nothing is left.
/// Keys are kept sorted, so rendering is stable.
///
/// # Examples
///
/// ```
/// use contact_uri::{ContactParameters, ContactScheme};
///
/// let params = ContactParameters::for_scheme(
///     ContactScheme::Mailto,
///     [("subject", "Order <b>42</b>"), ("cc", "ops@example.com, nope")],
/// )
/// .unwrap();
/// assert_eq!(params.to_string(), "cc=ops%40example.com&subject=Order%2042");
/// assert_eq!(
///     params.append_to("mailto:sales@example.com"),
///     "mailto:sales@example.com?cc=ops%40example.com&subject=Order%2042"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactParameters {
    params: BTreeMap<String, String>,
}

impl ContactParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters for a scheme, using the kind the scheme accepts
    /// for each name.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NotAccepted` if the scheme takes no parameter
    /// of that name, and `ParameterError::InvalidName` for a malformed name.
    pub fn for_scheme<I, K, V>(scheme: ContactScheme, pairs: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            let name = name.as_ref();
            let kind = scheme
                .parameter_kind(name)
                .ok_or_else(|| ParameterError::NotAccepted {
                    name: name.to_string(),
                    scheme: scheme.as_str().unwrap_or("generic"),
                })?;
            params.insert(name, value.as_ref(), kind)?;
        }
        Ok(params)
    }

    /// Sanitizes and inserts a parameter, replacing any previous value.
    ///
    /// A value that sanitizes to nothing removes the parameter.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidName` if the name is empty or holds
    /// anything but ASCII alphanumerics, hyphen or underscore.
    pub fn insert(
        &mut self,
        name: &str,
        value: &str,
        kind: ParameterKind,
    ) -> Result<(), ParameterError> {
        Self::validate_param_name(name)?;

        let value = kind.sanitize(value);
        if value.is_empty() {
            self.params.remove(name);
        } else {
            self.params.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Returns the sanitized value for a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends the parameters to a processed URI.
    ///
    /// `""` and `"#"` are returned unchanged, as is any URI when there are
    /// no parameters.
    #[must_use]
    pub fn append_to(&self, uri: &str) -> String {
        if self.is_empty() || uri.is_empty() || uri == NO_LINK {
            return uri.to_string();
        }
        let separator = if uri.contains('?') { '&' } else { '?' };
        format!("{uri}{separator}{self}")
    }

    fn validate_param_name(name: &str) -> Result<(), ParameterError> {
        if name.is_empty() {
            return Err(ParameterError::InvalidName {
                name: name.to_string(),
                reason: "parameter name cannot be empty",
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ParameterError::InvalidName {
                name: name.to_string(),
                reason: "name must be alphanumeric, hyphen, or underscore",
            });
        }

        Ok(())
    }
}

impl fmt::Display for ContactParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={}", percent_encode_component(v)))
            .collect();
        write!(f, "{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let params = ContactParameters::new();
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn insert_sanitizes_by_kind() {
        let mut params = ContactParameters::new();
        params
            .insert("body", "Hi,\r\n<b>there</b>", ParameterKind::Textarea)
            .unwrap();
        params
            .insert("subject", "Line\nbreak", ParameterKind::Text)
            .unwrap();
        assert_eq!(params.get("body"), Some("Hi,\nthere"));
        assert_eq!(params.get("subject"), Some("Line break"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn empty_values_are_dropped() {
        let mut params = ContactParameters::new();
        params.insert("subject", "<b></b>", ParameterKind::Text).unwrap();
        params.insert("cc", "not-an-address", ParameterKind::Email).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn empty_value_removes_previous() {
        let mut params = ContactParameters::new();
        params.insert("subject", "hello", ParameterKind::Text).unwrap();
        params.insert("subject", "", ParameterKind::Text).unwrap();
        assert_eq!(params.get("subject"), None);
    }

    #[test]
    fn zero_is_not_empty() {
        let mut params = ContactParameters::new();
        params.insert("page", "0", ParameterKind::Text).unwrap();
        assert_eq!(params.get("page"), Some("0"));
    }

    #[test]
    fn invalid_name_fails() {
        let mut params = ContactParameters::new();
        assert!(matches!(
            params.insert("in valid", "x", ParameterKind::Text),
            Err(ParameterError::InvalidName { .. })
        ));
        assert!(matches!(
            params.insert("", "x", ParameterKind::Text),
            Err(ParameterError::InvalidName { .. })
        ));
    }

    #[test]
    fn for_scheme_uses_catalog() {
        let params =
            ContactParameters::for_scheme(ContactScheme::Sms, [("body", "Call me\nlater")])
                .unwrap();
        assert_eq!(params.get("body"), Some("Call me\nlater"));

        let result = ContactParameters::for_scheme(ContactScheme::Sms, [("subject", "x")]);
        assert!(matches!(
            result,
            Err(ParameterError::NotAccepted { scheme: "sms", .. })
        ));

        let result = ContactParameters::for_scheme(ContactScheme::Tel, [("body", "x")]);
        assert!(matches!(result, Err(ParameterError::NotAccepted { .. })));
    }

    #[test]
    fn display_sorted_and_encoded() {
        let params = ContactParameters::for_scheme(
            ContactScheme::Https,
            [("z", "last one"), ("a", "x&y=1")],
        )
        .unwrap();
        assert_eq!(params.to_string(), "a=x%26y%3D1&z=last%20one");
    }

    #[test]
    fn append_chooses_separator() {
        let params =
            ContactParameters::for_scheme(ContactScheme::Https, [("ref", "card")]).unwrap();
        assert_eq!(
            params.append_to("https://example.com/"),
            "https://example.com/?ref=card"
        );
        assert_eq!(
            params.append_to("https://example.com/?a=1"),
            "https://example.com/?a=1&ref=card"
        );
    }

    #[test]
    fn append_skips_empty_and_no_link() {
        let params =
            ContactParameters::for_scheme(ContactScheme::Https, [("ref", "card")]).unwrap();
        assert_eq!(params.append_to(""), "");
        assert_eq!(params.append_to("#"), "#");
        assert_eq!(
            ContactParameters::new().append_to("tel:+15550100"),
            "tel:+15550100"
        );
    }

    #[test]
    fn iter_returns_all_params() {
        let params =
            ContactParameters::for_scheme(ContactScheme::Https, [("b", "2"), ("a", "1")])
                .unwrap();
        let items: Vec<_> = params.iter().collect();
        assert_eq!(items, vec![("a", "1"), ("b", "2")]);
    }
}
