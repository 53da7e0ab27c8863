//! Plain-text sanitizers for query-parameter values.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("script/style pattern is valid")
});

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("line break pattern is valid"));

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("space run pattern is valid"));

static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("octet pattern is valid"));

/// Returns true for the ASCII whitespace removed from phone numbers, chat
/// handles and address lists. Non-ASCII spaces such as U+00A0 are not
/// whitespace here.
#[must_use]
pub(crate) const fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Sanitizes single-line text.
///
/// Tags are stripped, line breaks and tabs collapse into single spaces,
/// control characters and percent-encoded octets are removed, and the
/// result is trimmed.
///
/// # Examples
///
/// ```
/// use contact_uri::sanitize_text_field;
///
/// assert_eq!(sanitize_text_field("  Hello <b>there</b>\r\n  friend "), "Hello there friend");
/// ```
#[must_use]
pub fn sanitize_text_field(input: &str) -> String {
    sanitize_text(input, false)
}

/// Sanitizes multi-line text, keeping line breaks and tabs.
///
/// # Examples
///
/// ```
/// use contact_uri::sanitize_textarea_field;
///
/// assert_eq!(sanitize_textarea_field("Hi,\r\n<i>see</i> you\n"), "Hi,\nsee you");
/// ```
#[must_use]
pub fn sanitize_textarea_field(input: &str) -> String {
    sanitize_text(input, true)
}

fn sanitize_text(input: &str, keep_newlines: bool) -> String {
    let without_blocks = SCRIPT_OR_STYLE.replace_all(input, "");
    let mut filtered = strip_tags(&without_blocks);

    if !keep_newlines {
        filtered = LINE_BREAKS.replace_all(&filtered, " ").into_owned();
    }

    let mut filtered: String = filtered
        .chars()
        .filter(|c| !c.is_control() || (keep_newlines && matches!(c, '\n' | '\t')))
        .collect::<String>()
        .trim()
        .to_string();

    let mut found = false;
    while PERCENT_OCTET.is_match(&filtered) {
        filtered = PERCENT_OCTET.replace_all(&filtered, "").into_owned();
        found = true;
    }
    if found {
        filtered = SPACE_RUNS.replace_all(filtered.trim(), " ").into_owned();
    }

    filtered
}

/// Removes tags. A '<' that does not open a tag becomes `&lt;`.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let opens_tag = after.chars().next().is_some_and(|c| !c.is_whitespace());

        match after.find(['<', '>']) {
            Some(end) if opens_tag && after[end..].starts_with('>') => rest = &after[end + 1..],
            _ => {
                out.push_str("&lt;");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_strips_tags() {
        assert_eq!(sanitize_text_field("<b>bold</b> move"), "bold move");
    }

    #[test]
    fn text_removes_script_content() {
        assert_eq!(
            sanitize_text_field("hi<script type=\"x\">alert(1)</script> there"),
            "hi there"
        );
        assert_eq!(sanitize_text_field("<STYLE>p{}</STYLE>ok"), "ok");
    }

    #[test]
    fn text_collapses_line_breaks() {
        assert_eq!(sanitize_text_field("one\r\ntwo\t\tthree"), "one two three");
    }

    #[test]
    fn text_escapes_stray_less_than() {
        assert_eq!(sanitize_text_field("a < b"), "a &lt; b");
        assert_eq!(sanitize_text_field("x<y"), "x&lt;y");
        assert_eq!(sanitize_text_field("1 <2 <b>3</b>"), "1 &lt;2 3");
    }

    #[test]
    fn text_removes_control_characters() {
        assert_eq!(sanitize_text_field("a\u{0}b\u{7}c"), "abc");
    }

    #[test]
    fn text_removes_percent_octets() {
        assert_eq!(sanitize_text_field("50%25 off %0a now"), "50 off now");
        assert_eq!(sanitize_text_field("%%4141"), "");
    }

    #[test]
    fn textarea_keeps_line_breaks() {
        assert_eq!(
            sanitize_textarea_field("line one\r\nline two\n\tindented"),
            "line one\nline two\n\tindented"
        );
    }

    #[test]
    fn textarea_strips_tags_and_trims() {
        assert_eq!(sanitize_textarea_field("\n <p>para</p>\n"), "para");
    }

    #[test]
    fn ascii_space_excludes_unicode_spaces() {
        for c in [' ', '\t', '\n', '\x0B', '\x0C', '\r'] {
            assert!(is_ascii_space(c), "{c:?}");
        }
        assert!(!is_ascii_space('\u{00A0}'));
        assert!(!is_ascii_space('\u{2003}'));
        assert!(!is_ascii_space('\u{3000}'));
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize_text_field("Question about order 42"), "Question about order 42");
    }
}
