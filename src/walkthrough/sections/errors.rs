//! Error handling: a recovered arithmetic failure and a custom error type

use crate::walkthrough::section::{Section, SectionError};
use std::fmt;

/// The specifically-recognized arithmetic failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero")
    }
}

impl std::error::Error for DivisionByZero {}

/// Custom validation failure for negative inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeValueError;

impl fmt::Display for NegativeValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "only non-negative values are allowed")
    }
}

impl std::error::Error for NegativeValueError {}

/// Integer division guarding against a zero divisor
pub fn checked_div(a: i64, b: i64) -> Result<i64, DivisionByZero> {
    if b == 0 {
        Err(DivisionByZero)
    } else {
        Ok(a / b)
    }
}

/// Return the argument unchanged, or signal the custom failure when negative
///
/// Defined for the demonstration but never invoked by the walkthrough itself.
pub fn check_positive(x: i64) -> Result<i64, NegativeValueError> {
    if x < 0 {
        Err(NegativeValueError)
    } else {
        Ok(x)
    }
}

pub struct ErrorsSection;

impl Section for ErrorsSection {
    fn name(&self) -> &str {
        "errors"
    }

    fn title(&self) -> &str {
        "Error Handling"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = Vec::new();

        match checked_div(10, 0) {
            Ok(result) => lines.push(format!("10 / 0 = {result}")),
            Err(DivisionByZero) => lines.push("Cannot divide by zero!".to_string()),
        }
        // Runs on both arms, like a finally block
        lines.push("cleanup runs regardless".to_string());

        Ok(lines)
    }
}
