//! Values & conversions: primitive values and text/number conversions

use crate::walkthrough::section::{Section, SectionError};
use std::num::{ParseFloatError, ParseIntError};

/// Parse a textual integer representation
pub fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    text.parse()
}

/// Parse a textual floating-point representation
pub fn parse_float(text: &str) -> Result<f64, ParseFloatError> {
    text.parse()
}

/// Convert a number to its text representation
pub fn to_text(value: i64) -> String {
    value.to_string()
}

pub struct ValuesSection;

impl Section for ValuesSection {
    fn name(&self) -> &str {
        "values"
    }

    fn title(&self) -> &str {
        "Values & Conversions"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let age: i64 = 25;
        let price: f64 = 19.99;
        let name = "Alice";
        let is_active = true;

        let x = parse_int("42")?;
        let y = parse_float("3.14")?;
        let z = to_text(100);

        Ok(vec![
            format!("age: {age}"),
            format!("price: {price}"),
            format!("name: {name}"),
            format!("is_active: {is_active}"),
            format!("\"42\" parsed as integer: {x}"),
            format!("\"3.14\" parsed as float: {y}"),
            format!("100 converted to text: {z}"),
        ])
    }
}
