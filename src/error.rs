//! Error types for contact URI validation.
//!
//! The string entry points collapse every error into the empty string. The
//! typed APIs return these so callers can tell why a value was rejected.

use std::fmt;

/// Errors that can occur when processing a contact URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUriError {
    /// The input that was rejected
    pub input: String,
    /// The specific reason for the rejection
    pub kind: ContactUriErrorKind,
}

/// Specific contact URI rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUriErrorKind {
    /// URI exceeds the configured maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// No valid scheme before the first ':'
    MissingScheme,
    /// Neither a host nor a path is present
    MissingTarget,
    /// The `tel`/`sms` payload is not a phone number
    InvalidPhoneNumber(PhoneNumberError),
    /// The `skype` payload is not a chat handle
    InvalidChatHandle(ChatHandleError),
    /// The `mailto` payload holds no valid address
    InvalidEmail(EmailError),
    /// The URL escaper rejected the URI
    InvalidUrl(EscapeError),
    /// Decoding and escaping kept changing the URL
    Unsettled {
        /// Passes made before giving up
        passes: usize,
    },
}

impl fmt::Display for ContactUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected contact URI '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for ContactUriErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { max, actual } => {
                write!(f, "URI length {actual} exceeds maximum {max}")
            }
            Self::MissingScheme => write!(f, "missing scheme; URI must start with '<scheme>:'"),
            Self::MissingTarget => write!(f, "URI has neither a host nor a path"),
            Self::InvalidPhoneNumber(e) => write!(f, "invalid phone number: {e}"),
            Self::InvalidChatHandle(e) => write!(f, "invalid chat handle: {e}"),
            Self::InvalidEmail(e) => write!(f, "invalid email: {e}"),
            Self::InvalidUrl(e) => write!(f, "invalid URL: {e}"),
            Self::Unsettled { passes } => {
                write!(f, "URL still changing after {passes} sanitize passes")
            }
        }
    }
}

impl std::error::Error for ContactUriError {}

/// Errors for phone number normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// Nothing left after removing separators
    Empty,
    /// Character that is neither a digit nor a separator
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the normalized number
        position: usize,
    },
    /// A '+' anywhere but the first position
    MisplacedPlus {
        /// Position in the normalized number
        position: usize,
    },
    /// A lone '+' with no digits
    NoDigits,
}

impl fmt::Display for PhoneNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "phone number cannot be empty"),
            Self::InvalidChar { char, position } => write!(
                f,
                "invalid character '{char}' at position {position}; only digits and an optional leading '+' allowed"
            ),
            Self::MisplacedPlus { position } => {
                write!(f, "'+' at position {position}; it is only allowed at the start")
            }
            Self::NoDigits => write!(f, "phone number must contain at least one digit"),
        }
    }
}

impl std::error::Error for PhoneNumberError {}

/// Errors for chat handle normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatHandleError {
    /// Handle is empty
    Empty,
    /// Candidate matches neither the named nor the numeric handle form
    Malformed {
        /// The candidate URI that failed to match
        candidate: String,
    },
}

impl fmt::Display for ChatHandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "chat handle cannot be empty"),
            Self::Malformed { candidate } => write!(
                f,
                "'{candidate}' is neither a 6-32 char handle starting with a lowercase letter nor '+' followed by digits"
            ),
        }
    }
}

impl std::error::Error for ChatHandleError {}

/// Errors for email address validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Address or list is empty
    Empty,
    /// Address is shorter than the minimum length
    TooShort {
        /// Minimum allowed length
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// No '@' after the first character
    MissingAt,
    /// Local part is empty or contains invalid characters
    InvalidLocalPart {
        /// The offending local part
        local: String,
    },
    /// Domain part is invalid
    InvalidDomain {
        /// The offending domain
        domain: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// No element of the list survived validation
    NoValidAddresses,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email address cannot be empty"),
            Self::TooShort { min, actual } => {
                write!(f, "email address length {actual} is below minimum {min}")
            }
            Self::MissingAt => write!(f, "email address must contain '@' after the local part"),
            Self::InvalidLocalPart { local } => write!(f, "invalid local part '{local}'"),
            Self::InvalidDomain { domain, reason } => {
                write!(f, "invalid domain '{domain}': {reason}")
            }
            Self::NoValidAddresses => write!(f, "no valid email address in list"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Errors for URL escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// Nothing left after stripping disallowed characters
    Empty,
    /// Scheme is not in the allow-list
    DisallowedScheme {
        /// The rejected scheme
        scheme: String,
    },
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty after removing disallowed characters"),
            Self::DisallowedScheme { scheme } => {
                write!(f, "scheme '{scheme}' is not in the allow-list")
            }
        }
    }
}

impl std::error::Error for EscapeError {}

/// Errors for contact query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Invalid parameter name
    InvalidName {
        /// The invalid name
        name: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Parameter kind is not one of `text`, `textarea`, `email`
    UnknownKind {
        /// The unknown kind
        kind: String,
    },
    /// The scheme does not accept this parameter
    NotAccepted {
        /// Parameter name
        name: String,
        /// Scheme the parameter was offered to
        scheme: &'static str,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { name, reason } => {
                write!(f, "invalid parameter name '{name}': {reason}")
            }
            Self::UnknownKind { kind } => {
                write!(f, "unknown parameter kind '{kind}'; expected text, textarea, or email")
            }
            Self::NotAccepted { name, scheme } => {
                write!(f, "parameter '{name}' is not accepted by '{scheme}' URIs")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
