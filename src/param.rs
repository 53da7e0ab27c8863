//! Query-parameter value sanitizing.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::email::normalize_emails;
use crate::error::ParameterError;
use crate::text::{sanitize_text_field, sanitize_textarea_field};

/// How a query-parameter value is sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParameterKind {
    /// Single-line text such as `subject`
    Text,
    /// Multi-line text such as `body`
    Textarea,
    /// Comma-separated addresses such as `cc` and `bcc`
    Email,
}

impl ParameterKind {
    /// Parses a kind name.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::UnknownKind` for anything but `text`,
    /// `textarea` or `email`.
    pub fn parse(input: &str) -> Result<Self, ParameterError> {
        match input {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "email" => Ok(Self::Email),
            _ => Err(ParameterError::UnknownKind {
                kind: input.to_string(),
            }),
        }
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
        }
    }

    /// Sanitizes a value of this kind. An empty result means "drop it".
    #[must_use]
    pub fn sanitize(self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        match self {
            Self::Text => sanitize_text_field(value),
            Self::Textarea => sanitize_textarea_field(value),
            Self::Email => normalize_emails(value),
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Sanitizes a query-parameter value by kind name.
///
/// An empty value, or an unknown kind, yields `""`.
///
/// # Examples
///
/// ```
/// use contact_uri::sanitize_parameter_value;
///
/// assert_eq!(
///     sanitize_parameter_value("good@x.com, bad@@x, also@y.org", "email"),
///     "good@x.com,also@y.org"
/// );
/// assert_eq!(sanitize_parameter_value("Hi <b>there</b>", "text"), "Hi there");
/// assert_eq!(sanitize_parameter_value("x", "bogus"), "");
/// ```
#[must_use]
pub fn sanitize_parameter_value(value: &str, kind: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match ParameterKind::parse(kind) {
        Ok(kind) => kind.sanitize(value),
        Err(error) => {
            debug!(%error, "dropping parameter value");
            String::new()
        }
    }
}
