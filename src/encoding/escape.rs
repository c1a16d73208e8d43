use std::borrow::Cow;

use super::{should_escape, Mode, Sink};
use crate::utils::RawStringExt;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode `input` for the URL component described by `mode`.
///
/// Bytes that may appear literally are copied, a space in a query component
/// becomes `+`, and everything else becomes `%XX` with uppercase hex. The
/// result is always ASCII. When nothing needs escaping the input is handed
/// back without allocating.
pub fn encode(input: &[u8], mode: Mode) -> Cow<'_, str> {
    let hex_count = input
        .iter()
        .filter(|&&c| should_escape(c, mode) && !is_query_space(c, mode))
        .count();
    let space_count = input.iter().filter(|&&c| is_query_space(c, mode)).count();

    if hex_count == 0 && space_count == 0 {
        // Only unescaped ASCII is left, so this always borrows.
        if let Ok(s) = std::str::from_utf8(input) {
            return Cow::Borrowed(s);
        }
    }

    let mut out = Vec::with_capacity(input.len() + 2 * hex_count);
    encode_to(input, mode, &mut out);
    Cow::Owned(out.to_raw_string())
}

/// Same walk as [`encode`], but streams into `sink`.
pub fn encode_to<S: Sink>(input: &[u8], mode: Mode, mut sink: S) {
    for &c in input {
        if is_query_space(c, mode) {
            sink.escaped(b"+");
        } else if should_escape(c, mode) {
            sink.escaped(&[
                b'%',
                UPPER_HEX[(c >> 4) as usize],
                UPPER_HEX[(c & 0x0F) as usize],
            ]);
        } else {
            sink.literal(c);
        }
    }
}

fn is_query_space(c: u8, mode: Mode) -> bool {
    c == b' ' && mode == Mode::QueryComponent
}
