use std::io;
use std::path::PathBuf;

use crate::format::Format;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stream content matches no known signature")]
    UnrecognizedContent,

    #[error("no format is registered for the extension of '{}'", path.display())]
    UnknownExtension { path: PathBuf },

    #[error("format {0} has no signature probe")]
    NoProbe(Format),

    #[error("read length must be at least 1")]
    EmptyRead,

    #[error("failed to open '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
