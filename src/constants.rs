//! Constants for contact URI validation.

/// Schemes accepted by the URL escaper on the generic and web branches.
pub const ALLOWED_SCHEMES: &[&str] = &["viber", "tel", "sms", "skype", "mailto", "https", "http"];

/// Explicit "no link" sentinel. Passed through unchanged in both modes.
pub const NO_LINK: &str = "#";

/// Default maximum input length in bytes.
pub const MAX_URI_LENGTH: usize = 2048;

/// Most decode-then-escape passes made on a URL before it is rejected.
pub const MAX_SANITIZE_PASSES: usize = 8;

/// Minimum length of a named chat handle.
pub const MIN_CHAT_HANDLE_LENGTH: usize = 6;

/// Maximum length of a named chat handle.
pub const MAX_CHAT_HANDLE_LENGTH: usize = 32;

/// Minimum length of an email address in bytes.
pub const MIN_EMAIL_LENGTH: usize = 6;

/// Separator between addresses in an email list.
pub const EMAIL_LIST_SEPARATOR: char = ',';
