//! The section abstraction every demonstration implements
//!
//! A section is one self-contained demonstration of a language feature. It
//! exposes a stable name (used for lookup), a human-readable title, and a
//! `run` method producing the section's observable output as lines.

use std::fmt;
use std::io;
use std::num::{ParseFloatError, ParseIntError};

/// Error that can occur while running a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionError {
    /// A textual value could not be parsed into its target type
    Parse(String),
    /// A filesystem operation failed
    Io(String),
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::Parse(msg) => write!(f, "Parse error: {msg}"),
            SectionError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for SectionError {}

impl From<ParseIntError> for SectionError {
    fn from(err: ParseIntError) -> Self {
        SectionError::Parse(err.to_string())
    }
}

impl From<ParseFloatError> for SectionError {
    fn from(err: ParseFloatError) -> Self {
        SectionError::Parse(err.to_string())
    }
}

impl From<io::Error> for SectionError {
    fn from(err: io::Error) -> Self {
        SectionError::Io(err.to_string())
    }
}

/// Trait for demonstration sections
///
/// Implementors run one demonstration top to bottom and report its output
/// as a vector of lines. Sections share no state with each other.
pub trait Section: Send + Sync {
    /// The lookup name of this section (e.g., "containers", "generators")
    fn name(&self) -> &str;

    /// A short human-readable title for rendered output
    fn title(&self) -> &str;

    /// Run the demonstration and return its printed lines
    fn run(&self) -> Result<Vec<String>, SectionError>;
}
