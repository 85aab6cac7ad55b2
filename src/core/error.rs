use std::fmt;
use std::path::PathBuf;

use crate::core::constants::exit_codes;

/// Error types for rescaling operations
#[derive(Debug)]
pub enum RescaleError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Extension glob compilation error
    Glob(globset::Error),

    /// A coordinate token that is not a number
    InvalidNumber { token: String, expected: &'static str },

    /// An error tied to a specific line of a file
    AtLine {
        path: PathBuf,
        line: usize,
        source: Box<RescaleError>,
    },

    /// More than one positional directory was supplied
    TooManyDirectories(usize),
}

impl RescaleError {
    /// Attach a file location to this error
    pub fn at_line(self, path: impl Into<PathBuf>, line: usize) -> Self {
        RescaleError::AtLine {
            path: path.into(),
            line,
            source: Box::new(self),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RescaleError::TooManyDirectories(_) => exit_codes::TOO_MANY_DIRECTORIES,
            RescaleError::AtLine { source, .. } => source.exit_code(),
            _ => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for RescaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RescaleError::Io(err) => write!(f, "IO error: {err}"),
            RescaleError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RescaleError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            RescaleError::FileWalking(err) => write!(f, "File walking error: {err}"),
            RescaleError::Glob(err) => write!(f, "Invalid extension pattern: {err}"),
            RescaleError::InvalidNumber { token, expected } => {
                write!(f, "'{token}' is not a valid {expected}")
            }
            RescaleError::AtLine { path, line, source } => {
                write!(f, "{}:{line}: {source}", path.display())
            }
            RescaleError::TooManyDirectories(_) => {
                write!(f, "Only one [dir] argument may be supplied")
            }
        }
    }
}

impl std::error::Error for RescaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RescaleError::Io(err) => Some(err),
            RescaleError::TomlParsing(err) => Some(err),
            RescaleError::FileWalking(err) => Some(err),
            RescaleError::Glob(err) => Some(err),
            RescaleError::AtLine { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RescaleError {
    fn from(err: std::io::Error) -> Self {
        RescaleError::Io(err)
    }
}

impl From<toml::de::Error> for RescaleError {
    fn from(err: toml::de::Error) -> Self {
        RescaleError::TomlParsing(err)
    }
}

impl From<ignore::Error> for RescaleError {
    fn from(err: ignore::Error) -> Self {
        RescaleError::FileWalking(err)
    }
}

impl From<globset::Error> for RescaleError {
    fn from(err: globset::Error) -> Self {
        RescaleError::Glob(err)
    }
}

impl From<tempfile::PersistError> for RescaleError {
    fn from(err: tempfile::PersistError) -> Self {
        RescaleError::Io(err.error)
    }
}

/// Type alias for Results using RescaleError
pub type Result<T> = std::result::Result<T, RescaleError>;
