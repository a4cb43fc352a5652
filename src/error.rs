use std::io;
use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid seed {value:?}: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}
