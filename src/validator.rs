//! Scheme dispatch and the string entry points.

use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::chat_handle::ChatHandle;
use crate::config::ValidatorConfig;
use crate::constants::{MAX_SANITIZE_PASSES, NO_LINK};
use crate::email::EmailList;
use crate::error::{ContactUriError, ContactUriErrorKind};
use crate::escape::escape_url_with;
use crate::percent::percent_decode_all;
use crate::phone::PhoneNumber;
use crate::scheme::{ContactScheme, Mode};
use crate::uri::UriParts;

static DEFAULT_VALIDATOR: LazyLock<ContactValidator> = LazyLock::new(ContactValidator::default);

/// Validates contact URIs and rewrites them into canonical form.
///
/// `tel`, `sms`, `skype` and `mailto` URIs are normalized by their payload
/// rules and come out the same in both modes. `http`, `https` and any other
/// scheme are percent-decoded until no escape is left; in [`Mode::Sanitize`]
/// the decoded URI is also escaped and its scheme checked against the
/// allow-list, repeating until the result no longer changes.
///
/// # Examples
///
/// ```
/// use contact_uri::{ContactValidator, Mode, ValidatorConfig};
///
/// let validator = ContactValidator::new(ValidatorConfig::default());
///
/// assert_eq!(
///     validator.process("tel:+1-541-754-3010", Mode::Sanitize),
///     "tel:+15417543010"
/// );
/// assert_eq!(validator.process("tel:555-CALL-NOW", Mode::Sanitize), "");
///
/// let url = "https://example.com/?a=1%26b=2";
/// assert_eq!(validator.process(url, Mode::Validate), "https://example.com/?a=1&b=2");
/// assert_eq!(validator.process(url, Mode::Sanitize), "https://example.com/?a=1&#038;b=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactValidator {
    config: ValidatorConfig,
}

impl ContactValidator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Processes a contact URI, returning `""` on rejection.
    ///
    /// `""` and `"#"` are returned unchanged.
    #[must_use]
    pub fn process(&self, uri: &str, mode: Mode) -> String {
        match self.try_process(uri, mode) {
            Ok(processed) => processed,
            Err(error) => {
                let scheme = UriParts::split(uri).scheme().unwrap_or_default();
                trace!(input = %error.input, "rejected input");
                debug!(scheme, %mode, reason = %error.kind, "contact URI rejected");
                String::new()
            }
        }
    }

    /// Processes a contact URI for storage.
    #[must_use]
    pub fn sanitize(&self, uri: &str) -> String {
        self.process(uri, Mode::Sanitize)
    }

    /// Processes a contact URI for output.
    #[must_use]
    pub fn validate(&self, uri: &str) -> String {
        self.process(uri, Mode::Validate)
    }

    /// Processes a contact URI, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns `ContactUriError` if:
    /// - The input or the result is longer than the limit
    /// - The URI has no scheme, or neither a host nor a path
    /// - The payload fails its scheme's rules
    /// - The URL escaper rejects the URI
    /// - A sanitized URL is still changing after `MAX_SANITIZE_PASSES` passes
    pub fn try_process(&self, uri: &str, mode: Mode) -> Result<String, ContactUriError> {
        if uri.is_empty() || uri == NO_LINK {
            return Ok(uri.to_string());
        }

        let err = |kind: ContactUriErrorKind| ContactUriError {
            input: uri.to_string(),
            kind,
        };

        self.check_length(uri).map_err(err)?;

        let parts = UriParts::split(uri);
        let scheme = parts.scheme().ok_or_else(|| err(ContactUriErrorKind::MissingScheme))?;
        if !parts.has_target() {
            return Err(err(ContactUriErrorKind::MissingTarget));
        }

        let path = parts.path().unwrap_or_default();
        let kind = ContactScheme::classify(scheme);
        trace!(%kind, %mode, "dispatching contact URI");

        let processed = match kind {
            ContactScheme::Tel | ContactScheme::Sms => PhoneNumber::parse(path)
                .map(|phone| format!("{scheme}:{phone}"))
                .map_err(ContactUriErrorKind::InvalidPhoneNumber),
            ContactScheme::Skype => ChatHandle::parse(path, parts.query())
                .map(|handle| handle.to_string())
                .map_err(ContactUriErrorKind::InvalidChatHandle),
            ContactScheme::Mailto => EmailList::parse(path)
                .map(|list| format!("{scheme}:{list}"))
                .map_err(ContactUriErrorKind::InvalidEmail),
            ContactScheme::Http | ContactScheme::Https | ContactScheme::Generic => {
                self.finish_url(uri, mode)
            }
        }
        .map_err(err)?;

        // Results must pass the input guard when processed again
        self.check_length(&processed).map_err(err)?;

        Ok(processed)
    }

    /// The only place the two modes differ.
    fn finish_url(&self, uri: &str, mode: Mode) -> Result<String, ContactUriErrorKind> {
        if mode == Mode::Validate {
            return Ok(percent_decode_all(uri));
        }

        // Removing characters can join a new escape, e.g. "%4<1"
        let mut current = uri.to_string();
        for _ in 0..MAX_SANITIZE_PASSES {
            let escaped = escape_url_with(&percent_decode_all(&current), |scheme| {
                self.config.allows_scheme(scheme)
            })
            .map_err(ContactUriErrorKind::InvalidUrl)?;

            if escaped == current {
                return Self::check_structure(escaped);
            }
            current = escaped;
        }

        Err(ContactUriErrorKind::Unsettled {
            passes: MAX_SANITIZE_PASSES,
        })
    }

    fn check_structure(escaped: String) -> Result<String, ContactUriErrorKind> {
        let parts = UriParts::split(&escaped);
        if parts.scheme().is_none() {
            return Err(ContactUriErrorKind::MissingScheme);
        }
        if !parts.has_target() {
            return Err(ContactUriErrorKind::MissingTarget);
        }
        Ok(escaped)
    }

    fn check_length(&self, value: &str) -> Result<(), ContactUriErrorKind> {
        if value.len() > self.config.max_uri_length {
            return Err(ContactUriErrorKind::TooLong {
                max: self.config.max_uri_length,
                actual: value.len(),
            });
        }
        Ok(())
    }
}

/// Sanitizes a contact URI for storage, returning `""` on rejection.
///
/// # Examples
///
/// ```
/// use contact_uri::sanitize_contact_uri;
///
/// assert_eq!(sanitize_contact_uri("skype:johndoe123"), "skype:johndoe123?chat");
/// assert_eq!(sanitize_contact_uri("mailto: sales@example.com"), "mailto:sales@example.com");
/// assert_eq!(sanitize_contact_uri("ftp://example.com/file"), "");
/// assert_eq!(sanitize_contact_uri("#"), "#");
/// ```
#[must_use]
pub fn sanitize_contact_uri(uri: &str) -> String {
    DEFAULT_VALIDATOR.sanitize(uri)
}

/// Validates a contact URI for output, returning `""` on rejection.
///
/// The result of the `http`, `https` and generic branches is decoded but not
/// escaped; escape it when rendering.
///
/// # Examples
///
/// ```
/// use contact_uri::validate_contact_uri;
///
/// assert_eq!(validate_contact_uri("sms:+1 555 0100"), "sms:+15550100");
/// assert_eq!(
///     validate_contact_uri("https://example.com/a%20b"),
///     "https://example.com/a b"
/// );
/// ```
#[must_use]
pub fn validate_contact_uri(uri: &str) -> String {
    DEFAULT_VALIDATOR.validate(uri)
}
