use std::ascii;
use std::borrow::Cow;

use thiserror::Error;

use super::{should_escape, Mode, Sink};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` without two hex digits after it, or an escape that is not
    /// allowed in a host or zone. Holds at most three bytes starting at `%`.
    #[error("invalid URL escape \"{}\"", quote(.0))]
    MalformedEscape(Vec<u8>),

    /// A raw ASCII byte that has no place in a host or zone.
    #[error("invalid character \"{}\" in host name", quote(.0))]
    InvalidHostByte(Vec<u8>),
}

/// Printable form of raw payload bytes, e.g. `%\xff` or `\x01`.
fn quote(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| ascii::escape_default(b))
        .map(char::from)
        .collect()
}

/// Reverse [`encode`](super::encode): decode `%XX` escapes, and `+` as a
/// space in a query component.
///
/// The whole input is checked before anything is produced, so an error never
/// comes with partial output. Input without escapes is handed back borrowed.
pub fn decode(input: &[u8], mode: Mode) -> Result<Cow<'_, [u8]>, DecodeError> {
    let Validated { escapes, has_plus } = validate(input, mode)?;

    if escapes == 0 && !has_plus {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = Vec::with_capacity(input.len() - 2 * escapes);
    transform(input, mode, &mut out);
    Ok(Cow::Owned(out))
}

/// Same as [`decode`], but streams into `sink`. Nothing reaches the sink
/// unless the whole input is valid.
pub fn decode_to<S: Sink>(input: &[u8], mode: Mode, sink: S) -> Result<(), DecodeError> {
    validate(input, mode)?;
    transform(input, mode, sink);
    Ok(())
}

struct Validated {
    escapes: usize,
    has_plus: bool,
}

fn validate(input: &[u8], mode: Mode) -> Result<Validated, DecodeError> {
    let mut escapes = 0;
    let mut has_plus = false;
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            b'%' => {
                if i + 2 >= input.len() || !is_hex(input[i + 1]) || !is_hex(input[i + 2]) {
                    let end = input.len().min(i + 3);
                    return Err(DecodeError::MalformedEscape(input[i..end].to_vec()));
                }
                let escape = &input[i..i + 3];

                // RFC 3986 §3.2.2 only allows %-encoding non-ASCII bytes in a
                // host, RFC 6874 adds %25 for the zone delimiter.
                if mode == Mode::Host && unhex(input[i + 1]) < 8 && escape != b"%25" {
                    return Err(DecodeError::MalformedEscape(escape.to_vec()));
                }

                // Zone ids may only escape bytes that could be written raw in
                // a host, plus %25 and the spaces Windows puts in interface
                // names.
                if mode == Mode::Zone {
                    let v = (unhex(input[i + 1]) << 4) | unhex(input[i + 2]);
                    if escape != b"%25" && v != b' ' && should_escape(v, Mode::Host) {
                        return Err(DecodeError::MalformedEscape(escape.to_vec()));
                    }
                }

                escapes += 1;
                i += 3;
            }
            b'+' => {
                has_plus |= mode == Mode::QueryComponent;
                i += 1;
            }
            c => {
                if matches!(mode, Mode::Host | Mode::Zone)
                    && c.is_ascii()
                    && should_escape(c, mode)
                {
                    return Err(DecodeError::InvalidHostByte(vec![c]));
                }
                i += 1;
            }
        }
    }

    Ok(Validated { escapes, has_plus })
}

/// Expects input that already went through [`validate`].
fn transform<S: Sink>(input: &[u8], mode: Mode, mut sink: S) {
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'%' => {
                sink.escaped(&[(unhex(input[i + 1]) << 4) | unhex(input[i + 2])]);
                i += 3;
            }
            b'+' if mode == Mode::QueryComponent => {
                sink.escaped(b" ");
                i += 1;
            }
            c => {
                sink.literal(c);
                i += 1;
            }
        }
    }
}

fn is_hex(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

fn unhex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(s: &str) -> Result<Cow<'static, [u8]>, DecodeError> {
        Err(DecodeError::MalformedEscape(s.as_bytes().to_vec()))
    }

    #[test]
    fn decodes_escapes_in_either_case() {
        assert_eq!(decode(b"a%2Fb", Mode::PathSegment).unwrap(), &b"a/b"[..]);
        assert_eq!(decode(b"%c3%A9", Mode::Path).unwrap(), "é".as_bytes());
    }

    #[test]
    fn leaves_plain_input_borrowed() {
        let decoded = decode(b"index.html", Mode::PathSegment).unwrap();
        assert!(matches!(decoded, Cow::Borrowed(b"index.html")));
    }

    #[test]
    fn plus_is_space_only_in_query() {
        assert_eq!(decode(b"a+b", Mode::QueryComponent).unwrap(), &b"a b"[..]);
        assert_eq!(decode(b"a+b", Mode::Path).unwrap(), &b"a+b"[..]);
        assert_eq!(decode(b"a%2Bb", Mode::QueryComponent).unwrap(), &b"a+b"[..]);
    }

    #[test]
    fn rejects_truncated_or_non_hex_escapes() {
        assert_eq!(decode(b"abc%", Mode::PathSegment), malformed("%"));
        assert_eq!(decode(b"abc%2", Mode::PathSegment), malformed("%2"));
        assert_eq!(decode(b"abc%2G", Mode::PathSegment), malformed("%2G"));
        assert_eq!(decode(b"%zz%20", Mode::QueryComponent), malformed("%zz"));
    }

    #[test]
    fn reports_first_error_only() {
        assert_eq!(decode(b"%2G%", Mode::Path), malformed("%2G"));
        assert_eq!(
            decode(b"a/b%2G", Mode::Host),
            Err(DecodeError::InvalidHostByte(b"/".to_vec()))
        );
    }

    #[test]
    fn host_rejects_escaped_low_bytes() {
        assert_eq!(decode(b"%07", Mode::Host), malformed("%07"));
        assert_eq!(decode(b"%2F", Mode::Host), malformed("%2F"));
        assert_eq!(decode(b"%25", Mode::Host).unwrap(), &b"%"[..]);
        assert_eq!(decode(b"%C3%A9.com", Mode::Host).unwrap(), "é.com".as_bytes());
    }

    #[test]
    fn host_checks_the_high_nibble_of_escapes() {
        assert_eq!(decode(b"%7F", Mode::Host), malformed("%7F"));
        assert_eq!(decode(b"%7f", Mode::Host), malformed("%7f"));
        assert_eq!(decode(b"%08", Mode::Host), malformed("%08"));
        assert_eq!(decode(b"%80", Mode::Host).unwrap(), &[0x80u8][..]);
        assert_eq!(decode(b"%ff", Mode::Host).unwrap(), &[0xFFu8][..]);
    }

    #[test]
    fn host_rejects_raw_ascii_that_needs_escaping() {
        assert_eq!(
            decode(b"exa mple.com", Mode::Host),
            Err(DecodeError::InvalidHostByte(b" ".to_vec()))
        );
        assert_eq!(
            decode(b"user@site.com", Mode::Zone),
            Err(DecodeError::InvalidHostByte(b"@".to_vec()))
        );
        assert_eq!(decode(b"[::1]:80", Mode::Host).unwrap(), &b"[::1]:80"[..]);
        assert_eq!(decode(b"caf\xC3\xA9", Mode::Host).unwrap(), &b"caf\xC3\xA9"[..]);
    }

    #[test]
    fn zone_only_escapes_bytes_valid_in_a_host() {
        assert_eq!(decode(b"eth%30", Mode::Zone).unwrap(), &b"eth0"[..]);
        assert_eq!(decode(b"%25eth0", Mode::Zone).unwrap(), &b"%eth0"[..]);
        assert_eq!(
            decode(b"Local%20Area", Mode::Zone).unwrap(),
            &b"Local Area"[..]
        );
        assert_eq!(decode(b"eth%2F0", Mode::Zone), malformed("%2F"));
        assert_eq!(decode(b"%C3%A9", Mode::Zone), malformed("%C3"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecodeError::MalformedEscape(b"%2G".to_vec()).to_string(),
            "invalid URL escape \"%2G\""
        );
        assert_eq!(
            DecodeError::InvalidHostByte(b"/".to_vec()).to_string(),
            "invalid character \"/\" in host name"
        );
    }

    #[test]
    fn error_messages_keep_raw_bytes() {
        assert_eq!(
            decode(b"%\xff", Mode::Path).unwrap_err().to_string(),
            "invalid URL escape \"%\\xff\""
        );
        assert_eq!(
            decode(b"a\x01", Mode::Host).unwrap_err().to_string(),
            "invalid character \"\\x01\" in host name"
        );
        assert_eq!(
            decode(b"%\xc3\xa9", Mode::Path),
            Err(DecodeError::MalformedEscape(b"%\xc3\xa9".to_vec()))
        );
    }

    #[test]
    fn decode_to_writes_nothing_on_error() {
        let mut out = Vec::new();
        let result = decode_to(b"ok%20then%2", Mode::Path, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
