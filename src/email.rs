//! Email address and address-list types for `mailto:` URIs and `cc`/`bcc`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{EMAIL_LIST_SEPARATOR, MIN_EMAIL_LENGTH};
use crate::error::EmailError;
use crate::text::is_ascii_space;

static DOT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("dot run pattern is valid"));

/// Characters trimmed from the ends of a domain.
const DOMAIN_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '.'];

/// Characters trimmed from the ends of a domain label.
const LABEL_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '-'];

/// A syntactically valid email address.
///
/// Checked as `local@domain`: the local part uses the RFC 5322 atom
/// characters plus `.`, and the domain has at least two alphanumeric/hyphen
/// labels. This is a syntax check, not full RFC 5322 compliance.
///
/// # Examples
///
/// ```
/// use contact_uri::EmailAddress;
///
/// let email = EmailAddress::parse("someone@example.com").unwrap();
/// assert_eq!(email.local_part(), "someone");
/// assert_eq!(email.domain(), "example.com");
///
/// // Invalid characters are stripped before validation
/// let email = EmailAddress::parse("some<one>@exa mple.com").unwrap();
/// assert_eq!(email.as_str(), "someone@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    address: String,
    at: usize,
}

impl EmailAddress {
    /// Sanitizes then validates an email address.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if nothing valid remains after sanitizing.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let sanitized = Self::sanitize(input)?;
        Self::validate(&sanitized)?;
        let at = sanitized.find('@').ok_or(EmailError::MissingAt)?;
        Ok(Self {
            address: sanitized,
            at,
        })
    }

    /// Returns the full address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Returns the part before '@'.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.address[..self.at]
    }

    /// Returns the part after '@'.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.address[self.at + 1..]
    }

    /// Removes characters that cannot appear in an address.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the input is too short, has no '@' after the
    /// first character, or loses its local part or a domain label.
    pub fn sanitize(input: &str) -> Result<String, EmailError> {
        let (local, domain) = Self::split(input)?;

        let local: String = local.chars().filter(|c| Self::is_local_char(*c)).collect();
        if local.is_empty() {
            return Err(EmailError::InvalidLocalPart { local });
        }

        let domain = DOT_RUNS.replace_all(domain, "");
        let domain = domain.trim_matches(DOMAIN_TRIM);
        if domain.is_empty() {
            return Err(EmailError::InvalidDomain {
                domain: domain.to_string(),
                reason: "domain is empty",
            });
        }

        if domain.split('.').count() < 2 {
            return Err(EmailError::InvalidDomain {
                domain: domain.to_string(),
                reason: "domain needs at least two labels",
            });
        }

        let labels: Vec<String> = domain
            .split('.')
            .map(|label| {
                label
                    .trim_matches(LABEL_TRIM)
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
                    .collect::<String>()
            })
            .filter(|label| !label.is_empty())
            .collect();

        if labels.len() < 2 {
            return Err(EmailError::InvalidDomain {
                domain: domain.to_string(),
                reason: "domain needs at least two labels",
            });
        }

        Ok(format!("{local}@{}", labels.join(".")))
    }

    /// Checks that an address is syntactically valid as-is.
    ///
    /// # Errors
    ///
    /// Returns `EmailError` describing the first violated rule.
    pub fn validate(input: &str) -> Result<(), EmailError> {
        let (local, domain) = Self::split(input)?;

        if local.is_empty() || !local.chars().all(Self::is_local_char) {
            return Err(EmailError::InvalidLocalPart {
                local: local.to_string(),
            });
        }

        let invalid = |reason| EmailError::InvalidDomain {
            domain: domain.to_string(),
            reason,
        };

        if domain.contains("..") {
            return Err(invalid("consecutive dots"));
        }
        if domain.trim_matches(DOMAIN_TRIM) != domain {
            return Err(invalid("leading or trailing dot or whitespace"));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return Err(invalid("domain needs at least two labels"));
        }

        for label in labels {
            if label.trim_matches(LABEL_TRIM) != label {
                return Err(invalid("label starts or ends with a hyphen"));
            }
            if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid("label must be letters, digits, and hyphens"));
            }
        }

        Ok(())
    }

    /// Returns true for characters allowed in the local part.
    #[must_use]
    pub const fn is_local_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '#'
                    | '$'
                    | '%'
                    | '&'
                    | '\''
                    | '*'
                    | '+'
                    | '/'
                    | '='
                    | '?'
                    | '^'
                    | '_'
                    | '`'
                    | '{'
                    | '|'
                    | '}'
                    | '~'
                    | '.'
                    | '-'
            )
    }

    fn split(input: &str) -> Result<(&str, &str), EmailError> {
        if input.len() < MIN_EMAIL_LENGTH {
            return Err(EmailError::TooShort {
                min: MIN_EMAIL_LENGTH,
                actual: input.len(),
            });
        }

        match input.split_once('@') {
            Some((local, domain)) if !local.is_empty() => Ok((local, domain)),
            _ => Err(EmailError::MissingAt),
        }
    }
}

/// Sanitizes an address, returning `""` when nothing usable remains.
#[must_use]
pub fn sanitize_email(input: &str) -> String {
    EmailAddress::sanitize(input).unwrap_or_default()
}

/// Returns true if the address is syntactically valid as-is.
#[must_use]
pub fn is_email(input: &str) -> bool {
    EmailAddress::validate(input).is_ok()
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl FromStr for EmailAddress {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

/// A comma-separated list of valid email addresses.
///
/// ASCII whitespace is removed, invalid elements are dropped, and the surviving
/// addresses keep their order. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use contact_uri::EmailList;
///
/// let list = EmailList::parse("good@x.com, bad@@x, also@y.org").unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.to_string(), "good@x.com,also@y.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailList {
    addresses: Vec<EmailAddress>,
}

impl EmailList {
    /// Parses an address list, keeping only valid elements.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Empty` for blank input and
    /// `EmailError::NoValidAddresses` if every element is rejected.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let compact: String = input.chars().filter(|c| !is_ascii_space(*c)).collect();
        if compact.is_empty() {
            return Err(EmailError::Empty);
        }

        let addresses: Vec<EmailAddress> = compact
            .split(EMAIL_LIST_SEPARATOR)
            .filter(|element| !element.is_empty())
            .filter_map(|element| EmailAddress::parse(element).ok())
            .collect();

        if addresses.is_empty() {
            return Err(EmailError::NoValidAddresses);
        }

        Ok(Self { addresses })
    }

    /// Returns the number of addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns true if the list holds no address.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Returns an iterator over the addresses.
    pub fn iter(&self) -> impl Iterator<Item = &EmailAddress> {
        self.addresses.iter()
    }
}

/// Normalizes a comma-separated address list, returning `""` if none survive.
///
/// # Examples
///
/// ```
/// use contact_uri::normalize_emails;
///
/// assert_eq!(normalize_emails("a@b.com, c@d.com"), "a@b.com,c@d.com");
/// assert_eq!(normalize_emails("nope"), "");
/// ```
#[must_use]
pub fn normalize_emails(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    EmailList::parse(raw)
        .map(|list| list.to_string())
        .unwrap_or_default()
}

impl fmt::Display for EmailList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for address in &self.addresses {
            write!(f, "{separator}{address}")?;
            separator = ",";
        }
        Ok(())
    }
}

impl FromStr for EmailList {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.address)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
