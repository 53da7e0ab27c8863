//! Chat handle type for `skype:` URIs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ChatHandleError;
use crate::text::is_ascii_space;

static NAMED_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^skype:(?P<handle>[a-z][a-z0-9.,_-]{5,31})\?(?P<action>call|chat)$")
        .expect("named handle pattern is valid")
});

static NUMERIC_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^skype:(?P<handle>\+[0-9]+)\?(?P<action>call|chat)$")
        .expect("numeric handle pattern is valid")
});

/// What a chat link does when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChatAction {
    /// Start an audio call
    Call,
    /// Open a chat (the default)
    #[default]
    Chat,
}

impl ChatAction {
    /// Parses an action name, returning `None` for anything but `call`/`chat`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "call" => Some(Self::Call),
            "chat" => Some(Self::Chat),
            _ => None,
        }
    }

    /// Reads the action from a URI query, falling back to [`ChatAction::Chat`].
    ///
    /// The whole query must be the action; `call&x=1` is not `call`.
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        query.and_then(Self::parse).unwrap_or_default()
    }

    /// Returns the action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Chat => "chat",
        }
    }
}

impl fmt::Display for ChatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated Skype-style chat handle paired with its action.
///
/// A handle is either a name of 6-32 characters that starts with a lowercase
/// letter and continues with `[a-z0-9.,_-]`, or `+` followed by digits.
/// ASCII whitespace in the input is removed before matching.
///
/// # Examples
///
/// ```
/// use contact_uri::{ChatAction, ChatHandle};
///
/// let handle = ChatHandle::parse("johndoe123", None).unwrap();
/// assert_eq!(handle.handle(), "johndoe123");
/// assert_eq!(handle.action(), ChatAction::Chat);
/// assert_eq!(handle.to_string(), "skype:johndoe123?chat");
///
/// let handle = ChatHandle::parse("+1 555 0100", Some("call")).unwrap();
/// assert_eq!(handle.to_string(), "skype:+15550100?call");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatHandle {
    handle: String,
    action: ChatAction,
}

impl ChatHandle {
    /// Parses a handle from a URI path and query.
    ///
    /// The candidate `skype:<path>?<action>` is built first, with the action
    /// taken from the query or defaulted, and then matched as a whole.
    ///
    /// # Errors
    ///
    /// Returns `ChatHandleError` if the path is blank or the candidate
    /// matches neither handle form.
    pub fn parse(path: &str, query: Option<&str>) -> Result<Self, ChatHandleError> {
        let handle: String = path.chars().filter(|c| !is_ascii_space(*c)).collect();
        if handle.is_empty() {
            return Err(ChatHandleError::Empty);
        }
        let candidate = format!("skype:{handle}?{}", ChatAction::from_query(query));

        let captures = NAMED_HANDLE
            .captures(&candidate)
            .or_else(|| NUMERIC_HANDLE.captures(&candidate))
            .ok_or_else(|| ChatHandleError::Malformed {
                candidate: candidate.clone(),
            })?;

        let action = ChatAction::parse(&captures["action"]).unwrap_or_default();
        Ok(Self {
            handle: captures["handle"].to_string(),
            action,
        })
    }

    /// Returns the handle without scheme or action.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Returns the action.
    #[must_use]
    pub const fn action(&self) -> ChatAction {
        self.action
    }

    /// Returns true for the `+digits` form.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.handle.starts_with('+')
    }
}

/// Normalizes a chat handle into `skype:<handle>?<action>`, or `""`.
///
/// # Examples
///
/// ```
/// use contact_uri::normalize_handle;
///
/// assert_eq!(normalize_handle("janedoe", "call"), "skype:janedoe?call");
/// assert_eq!(normalize_handle("janedoe", "video"), "skype:janedoe?chat");
/// assert_eq!(normalize_handle("abcde", ""), "");
/// ```
#[must_use]
pub fn normalize_handle(path: &str, query: &str) -> String {
    ChatHandle::parse(path, Some(query))
        .map(|h| h.to_string())
        .unwrap_or_default()
}

impl fmt::Display for ChatHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skype:{}?{}", self.handle, self.action)
    }
}
