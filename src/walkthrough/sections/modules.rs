//! Modules: standard-library math and the external array crate

use crate::walkthrough::section::{Section, SectionError};
use ndarray::{arr1, Array1};
use std::f64::consts::PI;

/// Square root via the standard numeric library
pub fn square_root(value: f64) -> f64 {
    f64::sqrt(value)
}

/// Build a 1-D numeric array via the external array crate
pub fn build_array(values: &[i64]) -> Array1<i64> {
    arr1(values)
}

pub struct ModulesSection;

impl Section for ModulesSection {
    fn name(&self) -> &str {
        "modules"
    }

    fn title(&self) -> &str {
        "Modules"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let arr = build_array(&[1, 2, 3]);

        Ok(vec![
            format!("square root of 16: {}", square_root(16.0)),
            format!("array: {arr}"),
            format!("value of pi: {PI}"),
        ])
    }
}
