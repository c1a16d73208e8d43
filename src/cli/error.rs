use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::{DecodeError, ParseModeError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidEncoding(#[from] ParseModeError),

    #[error("must only supply up to one file name argument")]
    TooManyFiles,

    #[error("open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read input: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("write output: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidEncoding(_) | CliError::TooManyFiles => 1,
            CliError::Read(_) | CliError::Decode(_) | CliError::Write(_) => 2,
            CliError::Open { .. } => 3,
        }
    }
}
