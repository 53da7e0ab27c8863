//! Contact scheme classification and processing modes.

use std::fmt;

use crate::param::ParameterKind;

/// The scheme of a contact URI, classified for dispatch.
///
/// Classification is a case-sensitive exact match; anything else, including
/// `TEL` or `Mailto`, is [`ContactScheme::Generic`].
///
/// # Examples
///
/// ```
/// use contact_uri::ContactScheme;
///
/// assert_eq!(ContactScheme::classify("tel"), ContactScheme::Tel);
/// assert_eq!(ContactScheme::classify("TEL"), ContactScheme::Generic);
/// assert_eq!(ContactScheme::classify("viber"), ContactScheme::Generic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContactScheme {
    /// `tel:` phone call
    Tel,
    /// `sms:` text message
    Sms,
    /// `skype:` chat or call
    Skype,
    /// `mailto:` email
    Mailto,
    /// `http:` web page
    Http,
    /// `https:` web page
    Https,
    /// Any other scheme
    Generic,
}

impl ContactScheme {
    /// Classifies a scheme string.
    #[must_use]
    pub fn classify(scheme: &str) -> Self {
        match scheme {
            "tel" => Self::Tel,
            "sms" => Self::Sms,
            "skype" => Self::Skype,
            "mailto" => Self::Mailto,
            "http" => Self::Http,
            "https" => Self::Https,
            _ => Self::Generic,
        }
    }

    /// Returns the literal scheme, or `None` for [`ContactScheme::Generic`].
    #[must_use]
    pub const fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Tel => Some("tel"),
            Self::Sms => Some("sms"),
            Self::Skype => Some("skype"),
            Self::Mailto => Some("mailto"),
            Self::Http => Some("http"),
            Self::Https => Some("https"),
            Self::Generic => None,
        }
    }

    /// Returns true for schemes whose output is the same in both modes.
    #[must_use]
    pub const fn is_mode_independent(self) -> bool {
        matches!(self, Self::Tel | Self::Sms | Self::Skype | Self::Mailto)
    }

    /// Returns the kind of a query parameter this scheme accepts.
    ///
    /// `sms` takes a `body`; `mailto` takes `subject`, `body`, `cc` and
    /// `bcc`; web and generic URIs take any parameter as text; `tel` and
    /// `skype` take none.
    #[must_use]
    pub fn parameter_kind(self, name: &str) -> Option<ParameterKind> {
        match (self, name) {
            (Self::Sms | Self::Mailto, "body") => Some(ParameterKind::Textarea),
            (Self::Mailto, "cc" | "bcc") => Some(ParameterKind::Email),
            (Self::Mailto, "subject") | (Self::Http | Self::Https | Self::Generic, _) => {
                Some(ParameterKind::Text)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ContactScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or("generic"))
    }
}

/// What the processed URI is for.
///
/// The modes differ only on the `http`, `https` and generic branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Decode, then escape and re-check the scheme; result is safe to store.
    Sanitize,
    /// Decode only; the caller escapes once more at render time.
    Validate,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sanitize => write!(f, "sanitize"),
            Self::Validate => write!(f, "validate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_special_schemes() {
        assert_eq!(ContactScheme::classify("sms"), ContactScheme::Sms);
        assert_eq!(ContactScheme::classify("skype"), ContactScheme::Skype);
        assert_eq!(ContactScheme::classify("mailto"), ContactScheme::Mailto);
        assert_eq!(ContactScheme::classify("http"), ContactScheme::Http);
        assert_eq!(ContactScheme::classify("https"), ContactScheme::Https);
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(ContactScheme::classify("Mailto"), ContactScheme::Generic);
        assert_eq!(ContactScheme::classify("HTTPS"), ContactScheme::Generic);
    }

    #[test]
    fn mode_independent_schemes() {
        assert!(ContactScheme::Tel.is_mode_independent());
        assert!(ContactScheme::Mailto.is_mode_independent());
        assert!(!ContactScheme::Https.is_mode_independent());
        assert!(!ContactScheme::Generic.is_mode_independent());
    }

    #[test]
    fn parameter_catalog() {
        assert_eq!(
            ContactScheme::Sms.parameter_kind("body"),
            Some(ParameterKind::Textarea)
        );
        assert_eq!(ContactScheme::Sms.parameter_kind("subject"), None);
        assert_eq!(
            ContactScheme::Mailto.parameter_kind("subject"),
            Some(ParameterKind::Text)
        );
        assert_eq!(
            ContactScheme::Mailto.parameter_kind("bcc"),
            Some(ParameterKind::Email)
        );
        assert_eq!(
            ContactScheme::Https.parameter_kind("utm_source"),
            Some(ParameterKind::Text)
        );
        assert_eq!(ContactScheme::Tel.parameter_kind("body"), None);
        assert_eq!(ContactScheme::Skype.parameter_kind("call"), None);
    }

    #[test]
    fn display() {
        assert_eq!(ContactScheme::Skype.to_string(), "skype");
        assert_eq!(ContactScheme::Generic.to_string(), "generic");
        assert_eq!(Mode::Validate.to_string(), "validate");
    }
}
