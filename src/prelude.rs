//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use contact_uri::prelude::*;
//!
//! let validator = ContactValidator::new(ValidatorConfig::default());
//! assert_eq!(validator.process("sms:555 0100", Mode::Validate), "sms:5550100");
//! ```
//!
//! The text and URL escaping primitives are left out; import them by name.

pub use crate::{
    // Entry points
    sanitize_contact_uri, sanitize_parameter_value, validate_contact_uri,
    // Core types
    ChatAction, ChatHandle, ContactParameters, ContactScheme, ContactValidator, EmailAddress,
    EmailList, Mode, ParameterKind, PhoneNumber, UriParts, ValidatorConfig,
    // Errors
    ChatHandleError, ContactUriError, ContactUriErrorKind, EmailError, EscapeError,
    ParameterError, PhoneNumberError,
    // Constants
    ALLOWED_SCHEMES, MAX_URI_LENGTH, NO_LINK,
};
