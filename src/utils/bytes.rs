/// Extension trait to turn bytes into a `String` by casting each byte to a single char.
///
/// NOTE: This is only lossless for ASCII. Bytes >= 0x80 come out as the Latin-1 char of
/// the same value, not as UTF-8. Use `String::from_utf8_lossy` for arbitrary input.
pub trait RawStringExt {
    fn to_raw_string(&self) -> String;
}

impl RawStringExt for [u8] {
    fn to_raw_string(&self) -> String {
        self.iter().map(|&b| b as char).collect()
    }
}
