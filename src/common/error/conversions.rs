//! Error conversion implementations.
//!
//! `std::io::Error` and `serde_json::Error` convert through `#[from]`; the
//! remaining foreign errors are folded into the unified variants here.

use std::fmt::Display;

use super::types::Error;

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Other(format!("Invalid pattern: {}", err))
    }
}

impl Error {
    /// Wrap a YAML or other configuration parsing failure.
    pub fn config(err: impl Display) -> Self {
        Error::Config(err.to_string())
    }
}
