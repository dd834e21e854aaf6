use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // A field of the record failed validation, reason_code names the field.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // The underlying stream could not be opened, read or written.
    Io {
        message: String,
    },
    // The stream was readable but its content is not a catalog dump.
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn io(message: &str) -> LibraryError {
        LibraryError::Io { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => message,
            LibraryError::NotFound { message } => message,
            LibraryError::DuplicateKey { message } => message,
            LibraryError::Io { message } => message,
            LibraryError::Serialization { message } => message,
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::io(format!("io error {}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return LibraryError::io(format!("io error {}", err).as_str());
        }
        LibraryError::serialization(format!("json parsing {}", err).as_str())
    }
}

impl From<bincode::Error> for LibraryError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(io_err) if io_err.kind() != std::io::ErrorKind::UnexpectedEof => {
                LibraryError::from(io_err)
            }
            other => LibraryError::serialization(format!("binary parsing {}", other).as_str()),
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "{} ({})", message, reason),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Io { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

// PublicationKind tags what a catalog record describes. Only books exist today.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum PublicationKind {
    #[default]
    Book,
}

impl From<String> for PublicationKind {
    // only books are catalogued, so any stored kind reads back as a book
    fn from(_: String) -> Self {
        PublicationKind::Book
    }
}

impl Display for PublicationKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PublicationKind::Book => write!(f, "Book"),
        }
    }
}
