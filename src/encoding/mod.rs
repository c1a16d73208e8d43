//! Context-sensitive percent-encoding for URL components.

mod escape;
mod mode;
mod sink;
mod table;
mod unescape;

pub use escape::{encode, encode_to};
pub use mode::{Mode, ParseModeError};
pub use sink::Sink;
pub use table::should_escape;
pub use unescape::{decode, decode_to, DecodeError};
