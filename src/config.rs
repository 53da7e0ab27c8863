//! Configuration for the contact URI validator.

use crate::constants::{ALLOWED_SCHEMES, MAX_URI_LENGTH};

/// Configuration for a [`ContactValidator`](crate::ContactValidator).
///
/// # Examples
///
/// ```
/// use contact_uri::ValidatorConfig;
///
/// let config = ValidatorConfig::new().with_max_uri_length(512);
/// assert_eq!(config.max_uri_length, 512);
/// assert!(config.allows_scheme("viber"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Schemes the URL escaper lets through in Sanitize mode.
    ///
    /// Compared case-insensitively.
    /// Default: `viber`, `tel`, `sms`, `skype`, `mailto`, `https`, `http`
    pub allowed_schemes: Vec<String>,

    /// Maximum input length in bytes. Longer inputs are rejected.
    ///
    /// Results are held to the same limit in both modes.
    /// Default: 2048
    pub max_uri_length: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: ALLOWED_SCHEMES.iter().map(|s| (*s).to_string()).collect(),
            max_uri_length: MAX_URI_LENGTH,
        }
    }
}

impl ValidatorConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scheme allow-list.
    #[must_use]
    pub fn with_allowed_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the maximum input length.
    #[must_use]
    pub const fn with_max_uri_length(mut self, max: usize) -> Self {
        self.max_uri_length = max;
        self
    }

    /// Returns true if the scheme is in the allow-list.
    #[must_use]
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_schemes
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    }
}
