use crate::encoding::Sink;

/// ANSI color used for the `%XX`/`+` sequences produced while encoding.
pub const ESCAPED_COLOR: &str = "35";
/// ANSI color used for the bytes produced from escapes while decoding.
pub const UNESCAPED_COLOR: &str = "31";

/// A [`Sink`] that wraps every rewritten span in an ANSI color and passes
/// literal bytes through untouched.
pub struct Highlight<S> {
    inner: S,
    code: &'static str,
}

impl<S: Sink> Highlight<S> {
    pub fn new(inner: S, code: &'static str) -> Self {
        Self { inner, code }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for Highlight<S> {
    fn literal(&mut self, byte: u8) {
        self.inner.literal(byte);
    }

    fn escaped(&mut self, bytes: &[u8]) {
        self.inner.escaped(format!("\u{1b}[{}m", self.code).as_bytes());
        self.inner.escaped(bytes);
        self.inner.escaped(b"\x1b[0m");
    }
}

pub fn colorize(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
