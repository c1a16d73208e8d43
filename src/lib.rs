pub mod cli;
pub mod encoding;
pub mod input;
pub mod utils;
