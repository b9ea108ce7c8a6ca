use core::fmt;
use std::io;

/// Error enum with all errors that can be reported by the shell
#[derive(Debug)]
pub enum Error {
    /// `open` was issued while an image is already open.
    AlreadyOpen,
    /// The `open` target could not be opened for reading.
    NotFound,
    /// A command other than `open` was issued with no image open.
    NotOpen,
    /// A seek or read on the open image failed.
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyOpen => write!(f, "File system image already open."),
            Error::NotFound => write!(f, "File system image not found."),
            Error::NotOpen => write!(f, "File system image not open."),
            Error::Io(io_error) => write!(f, "File system image read failed: {}", io_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::Io(io_error) = self {
            Some(io_error)
        } else {
            None
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
