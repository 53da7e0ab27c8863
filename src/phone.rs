//! Phone number type for `tel:` and `sms:` URIs.

use std::fmt;
use std::str::FromStr;

use crate::error::PhoneNumberError;
use crate::text::is_ascii_space;

/// A normalized phone number: digits with an optional leading `+`.
///
/// ASCII whitespace and the cosmetic separators `.`, `-`, `(` and `)` are removed.
/// Any other non-digit character rejects the whole number.
///
/// # Examples
///
/// ```
/// use contact_uri::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+1 (541) 754-3010").unwrap();
/// assert_eq!(phone.as_str(), "+15417543010");
///
/// assert!(PhoneNumber::parse("555-CALL-NOW").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses and normalizes a phone number.
    ///
    /// # Errors
    ///
    /// Returns `PhoneNumberError` if:
    /// - Nothing is left after removing whitespace and separators
    /// - A character other than a digit or a leading `+` remains
    /// - The number is a lone `+`
    pub fn parse(input: &str) -> Result<Self, PhoneNumberError> {
        let normalized: String = input
            .chars()
            .filter(|c| !is_ascii_space(*c) && !Self::is_separator(*c))
            .collect();

        if normalized.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        for (i, c) in normalized.chars().enumerate() {
            match c {
                '0'..='9' => {}
                '+' if i == 0 => {}
                '+' => return Err(PhoneNumberError::MisplacedPlus { position: i }),
                _ => return Err(PhoneNumberError::InvalidChar { char: c, position: i }),
            }
        }

        if normalized == "+" {
            return Err(PhoneNumberError::NoDigits);
        }

        Ok(Self(normalized))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the number starts with `+`.
    #[must_use]
    pub fn is_international(&self) -> bool {
        self.0.starts_with('+')
    }

    /// Returns true for characters removed as cosmetic separators.
    #[must_use]
    pub const fn is_separator(c: char) -> bool {
        matches!(c, '.' | '-' | '(' | ')')
    }
}

/// Normalizes a phone number, returning `""` on rejection.
///
/// # Examples
///
/// ```
/// use contact_uri::normalize_phone;
///
/// assert_eq!(normalize_phone("+1-541-754-3010"), "+15417543010");
/// assert_eq!(normalize_phone("541.754.3010 x12"), "");
/// ```
#[must_use]
pub fn normalize_phone(path: &str) -> String {
    PhoneNumber::parse(path).map(|p| p.0).unwrap_or_default()
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_international_with_separators() {
        let phone = PhoneNumber::parse("+1-541-754-3010").unwrap();
        assert_eq!(phone.as_str(), "+15417543010");
        assert!(phone.is_international());
    }

    #[test]
    fn parse_national_with_parens_and_dots() {
        let phone = PhoneNumber::parse("(541) 754.3010").unwrap();
        assert_eq!(phone.as_str(), "5417543010");
        assert!(!phone.is_international());
    }

    #[test]
    fn whitespace_anywhere_is_removed() {
        let phone = PhoneNumber::parse(" +44\t20 7946\n0958 ").unwrap();
        assert_eq!(phone.as_str(), "+442079460958");
    }

    #[test]
    fn unicode_spaces_are_not_separators() {
        assert!(matches!(
            PhoneNumber::parse("555\u{00A0}0100"),
            Err(PhoneNumberError::InvalidChar { char: '\u{00A0}', position: 3 })
        ));
        assert_eq!(PhoneNumber::parse("555\x0B0100\x0C").unwrap().as_str(), "5550100");
    }

    #[test]
    fn letters_reject_whole_number() {
        let result = PhoneNumber::parse("555-CALL-NOW");
        assert!(matches!(
            result,
            Err(PhoneNumberError::InvalidChar { char: 'C', position: 3 })
        ));
    }

    #[test]
    fn inner_plus_rejected() {
        let result = PhoneNumber::parse("1+2");
        assert!(matches!(
            result,
            Err(PhoneNumberError::MisplacedPlus { position: 1 })
        ));
    }

    #[test]
    fn only_separators_is_empty() {
        assert!(matches!(PhoneNumber::parse(" (-.) "), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn lone_plus_rejected() {
        assert!(matches!(PhoneNumber::parse("+"), Err(PhoneNumberError::NoDigits)));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert!(PhoneNumber::parse("١٢٣").is_err());
    }

    #[test]
    fn normalize_returns_empty_on_rejection() {
        assert_eq!(normalize_phone("tel-me"), "");
        assert_eq!(normalize_phone("+15417543010"), "+15417543010");
    }
}
