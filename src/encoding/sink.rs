/// Destination for the bytes produced by [`encode_to`](super::encode_to)
/// and [`decode_to`](super::decode_to).
///
/// The engine tells bytes it copied through apart from bytes it rewrote, so
/// a caller can decorate the rewritten ones (e.g. terminal highlighting)
/// without the engine knowing anything about presentation.
pub trait Sink {
    /// A byte copied from the input unchanged.
    fn literal(&mut self, byte: u8);

    /// Output that replaces an escape: `%XX` or `+` when encoding, the
    /// decoded byte when decoding.
    fn escaped(&mut self, bytes: &[u8]);
}

impl Sink for Vec<u8> {
    fn literal(&mut self, byte: u8) {
        self.push(byte);
    }

    fn escaped(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn literal(&mut self, byte: u8) {
        (**self).literal(byte);
    }

    fn escaped(&mut self, bytes: &[u8]) {
        (**self).escaped(bytes);
    }
}
