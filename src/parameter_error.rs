//! Error handling for DH tables and joint inputs

use std::io;

/// Unified error to report malformed DH tables, malformed joint vectors and
/// failures while reading tables from YAML.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    /// DH table does not have 6 joints of 4 parameters each, a YAML table holds non-finite
    /// values, or a sampling range is unusable.
    InvalidConfiguration(String),
    /// Joint angle vector of the wrong length.
    InvalidInput { expected: usize, found: usize },
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::InvalidConfiguration(ref msg) =>
                write!(f, "Invalid DH configuration: {}", msg),
            ParameterError::InvalidInput { expected, found } =>
                write!(f, "Invalid joint angles: expected {}, found {}", expected, found),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
