use super::Mode;

/// Reports whether `c` has to be written as `%XX` when it appears in the
/// URL component described by `mode`.
///
/// Section numbers refer to RFC 3986.
pub fn should_escape(c: u8, mode: Mode) -> bool {
    // §2.3 Unreserved characters (alphanum)
    if c.is_ascii_alphanumeric() {
        return false;
    }

    if matches!(mode, Mode::Host | Mode::Zone) {
        // §3.2.2 sub-delims are allowed in reg-name. `:` and `[ ]` cover
        // `host:port` and `[ipv6]:port`. `< > "` can't be percent-encoded in
        // a host at all, so they have to be accepted literally.
        if matches!(
            c,
            b'!' | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b':'
                | b'['
                | b']'
                | b'<'
                | b'>'
                | b'"'
        ) {
            return false;
        }
    }

    match c {
        // §2.3 Unreserved characters (mark)
        b'-' | b'_' | b'.' | b'~' => return false,

        // §2.2 Reserved characters
        b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@' => {
            return match mode {
                // §3.3, the path is handled as a whole so only `?` ends it.
                Mode::Path => c == b'?',
                // §3.3, `/ ; ,` carry meaning between segments.
                Mode::PathSegment => matches!(c, b'/' | b';' | b',' | b'?'),
                // §3.2.1, `:` separates user from password.
                Mode::UserPassword => matches!(c, b'@' | b'/' | b'?' | b':'),
                // §3.4
                Mode::QueryComponent => true,
                // §4.1
                Mode::Fragment => false,
                Mode::Host | Mode::Zone => true,
            };
        }

        _ => {}
    }

    // Fragments may keep a subset of sub-delims literal. Single quote stays
    // escaped for callers that always got it escaped.
    if mode == Mode::Fragment && matches!(c, b'!' | b'(' | b')' | b'*') {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal_in(mode: Mode, chars: &str) -> String {
        chars
            .bytes()
            .filter(|&c| !should_escape(c, mode))
            .map(char::from)
            .collect()
    }

    const PUNCTUATION: &str = "!\"#$%&'()*+,/:;<=>?@[\\]^`{|} ";

    #[test]
    fn alphanumerics_are_never_escaped() {
        for mode in Mode::ALL {
            for c in (b'a'..=b'z').chain(b'A'..=b'Z').chain(b'0'..=b'9') {
                assert!(!should_escape(c, mode), "{:?} in {mode}", c as char);
            }
        }
    }

    #[test]
    fn marks_are_never_escaped() {
        for mode in Mode::ALL {
            assert_eq!(literal_in(mode, "-_.~"), "-_.~");
        }
    }

    #[test]
    fn non_ascii_and_controls_are_always_escaped() {
        for mode in Mode::ALL {
            for c in (0x00..0x20).chain(0x7F..=0xFF) {
                assert!(should_escape(c, mode), "{c:#04x} in {mode}");
            }
            assert!(should_escape(b'%', mode));
            assert!(should_escape(b'#', mode));
        }
    }

    #[test]
    fn literal_punctuation_per_mode() {
        assert_eq!(literal_in(Mode::Path, PUNCTUATION), "$&+,/:;=@");
        assert_eq!(literal_in(Mode::PathSegment, PUNCTUATION), "$&+:=@");
        assert_eq!(literal_in(Mode::UserPassword, PUNCTUATION), "$&+,;=");
        assert_eq!(literal_in(Mode::QueryComponent, PUNCTUATION), "");
        assert_eq!(literal_in(Mode::Fragment, PUNCTUATION), "!$&()*+,/:;=?@");
        assert_eq!(
            literal_in(Mode::Host, PUNCTUATION),
            "!\"$&'()*+,:;<=>[]"
        );
        assert_eq!(
            literal_in(Mode::Zone, PUNCTUATION),
            literal_in(Mode::Host, PUNCTUATION)
        );
    }

    #[test]
    fn fragment_keeps_single_quote_escaped() {
        assert!(should_escape(b'\'', Mode::Fragment));
        assert!(!should_escape(b'\'', Mode::Host));
    }
}
