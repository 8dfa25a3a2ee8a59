use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// Failures raised by extraction before the callback runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The named argument was absent. Checked before any mutation.
    InvalidArgument(&'static str),
    /// The container has no entry for the key.
    KeyNotFound,
}

impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(name) => write!(f, "invalid argument: `{}` is absent", name),
            Self::KeyNotFound => f.write_str("the given key was not present in the map"),
        }
    }
}

impl StdError for ExtractError {}

pub type Result<T> = std::result::Result<T, ExtractError>;
