//! Sanitizer and validator for contact URIs.
//!
//! A contact URI is a phone-call, text-message, email, web or chat-app link
//! entered by a site owner. This crate decides whether such a string is
//! well-formed for its scheme and rewrites it into a canonical, safe form,
//! or rejects it with the empty string.
//!
//! # Quick Start
//!
//! ```rust
//! use contact_uri::{sanitize_contact_uri, validate_contact_uri};
//!
//! // Payload rules per scheme
//! assert_eq!(sanitize_contact_uri("tel:+1-541-754-3010"), "tel:+15417543010");
//! assert_eq!(sanitize_contact_uri("skype:johndoe123"), "skype:johndoe123?chat");
//! assert_eq!(sanitize_contact_uri("tel:555-CALL-NOW"), "");
//!
//! // Web links are escaped for storage but only decoded for output
//! let url = "https://example.com/?a=1%26b=2";
//! assert_eq!(sanitize_contact_uri(url), "https://example.com/?a=1&#038;b=2");
//! assert_eq!(validate_contact_uri(url), "https://example.com/?a=1&b=2");
//!
//! // "" and "#" mean "no link" and pass through
//! assert_eq!(sanitize_contact_uri("#"), "#");
//! ```
//!
//! # Schemes
//!
//! | Scheme | Payload rule | Output |
//! |--------|--------------|--------|
//! | `tel`, `sms` | digits with optional leading `+`; `.-()` and ASCII whitespace removed | `tel:+15550100` |
//! | `skype` | `[a-z][a-z0-9.,_-]{5,31}` or `+digits`, action `call` or `chat` | `skype:name?chat` |
//! | `mailto` | comma-separated addresses, invalid ones dropped | `mailto:a@b.com,c@d.com` |
//! | `http`, `https`, other | percent-decoded; escaped and allow-listed in Sanitize mode | the URL |
//!
//! # Typed API
//!
//! The string functions report every rejection as `""`. The leaf types
//! ([`PhoneNumber`], [`ChatHandle`], [`EmailAddress`], [`EmailList`]) and
//! [`ContactValidator::try_process`] return typed errors instead.
//!
//! # Query Parameters
//!
//! ```rust
//! use contact_uri::{ContactParameters, ContactScheme, sanitize_contact_uri};
//!
//! let uri = sanitize_contact_uri("sms:+1 555 0100");
//! let params =
//!     ContactParameters::for_scheme(ContactScheme::Sms, [("body", "Hi <b>there</b>")]).unwrap();
//! assert_eq!(params.append_to(&uri), "sms:+15550100?body=Hi%20there");
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod chat_handle;
mod config;
mod constants;
mod email;
mod error;
mod escape;
mod param;
mod percent;
mod phone;
pub mod prelude;
mod query;
mod scheme;
mod text;
mod uri;
mod validator;

pub use chat_handle::{ChatAction, ChatHandle, normalize_handle};
pub use config::ValidatorConfig;
pub use constants::{
    ALLOWED_SCHEMES, EMAIL_LIST_SEPARATOR, MAX_CHAT_HANDLE_LENGTH, MAX_SANITIZE_PASSES,
    MAX_URI_LENGTH, MIN_CHAT_HANDLE_LENGTH, MIN_EMAIL_LENGTH, NO_LINK,
};
pub use email::{EmailAddress, EmailList, is_email, normalize_emails, sanitize_email};
pub use error::{
    ChatHandleError, ContactUriError, ContactUriErrorKind, EmailError, EscapeError,
    ParameterError, PhoneNumberError,
};
pub use escape::{escape_url, escape_url_with, is_url_char};
pub use param::{ParameterKind, sanitize_parameter_value};
pub use percent::{percent_decode, percent_decode_all, percent_encode_component};
pub use phone::{PhoneNumber, normalize_phone};
pub use query::ContactParameters;
pub use scheme::{ContactScheme, Mode};
pub use text::{sanitize_text_field, sanitize_textarea_field};
pub use uri::UriParts;
pub use validator::{ContactValidator, sanitize_contact_uri, validate_contact_uri};
