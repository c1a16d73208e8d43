pub mod bytes;
pub mod color;
pub mod log;

pub use bytes::RawStringExt;
pub use log::{LogLevel, set_global_log_level};
