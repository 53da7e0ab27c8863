//! Percent decoding and encoding.

/// Decodes every `%XX` octet in the input.
///
/// Malformed escapes are kept verbatim and `+` is not treated as a space.
/// Decoded bytes that do not form valid UTF-8 are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use contact_uri::percent_decode;
///
/// assert_eq!(percent_decode("a%26b%20c"), "a&b c");
/// assert_eq!(percent_decode("100%"), "100%");
/// assert_eq!(percent_decode("a+b"), "a+b");
/// ```
#[must_use]
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if let Some(octet) = escaped_octet(bytes, i) {
            decoded.push(octet);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

/// Decodes repeatedly until no `%XX` octet is left to decode.
///
/// `%2541` decodes to `%41` in one pass and to `A` here. Each pass either
/// shortens the string or removes a `%`, so the loop ends.
///
/// # Examples
///
/// ```
/// use contact_uri::percent_decode_all;
///
/// assert_eq!(percent_decode_all("%2541"), "A");
/// assert_eq!(percent_decode_all("100%25"), "100%");
/// ```
#[must_use]
pub fn percent_decode_all(input: &str) -> String {
    let mut current = percent_decode(input);
    loop {
        let next = percent_decode(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn escaped_octet(bytes: &[u8], i: usize) -> Option<u8> {
    if bytes[i] != b'%' {
        return None;
    }
    let hi = hex_value(*bytes.get(i + 1)?)?;
    let lo = hex_value(*bytes.get(i + 2)?)?;
    Some((hi << 4) | lo)
}

/// Encodes everything but RFC 3986 unreserved characters.
///
/// # Examples
///
/// ```
/// use contact_uri::percent_encode_component;
///
/// assert_eq!(percent_encode_component("Hi there & bye"), "Hi%20there%20%26%20bye");
/// assert_eq!(percent_encode_component("a-b_c.d~e"), "a-b_c.d~e");
/// ```
#[must_use]
pub fn percent_encode_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push('%');
            encoded.push(char::from(HEX[usize::from(byte >> 4)]));
            encoded.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    encoded
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
