//! Operators: arithmetic, comparison, logical, and augmented assignment

use crate::walkthrough::section::{Section, SectionError};

/// Integer division, truncating toward zero
pub fn truncating_div(a: i64, b: i64) -> i64 {
    a / b
}

/// Integer exponentiation
pub fn power(base: i64, exp: u32) -> i64 {
    base.pow(exp)
}

/// Compound condition: a numeric comparison combined with a boolean flag
pub fn is_active_adult(age: i64, is_active: bool) -> bool {
    age > 18 && is_active
}

pub struct OperatorsSection;

impl Section for OperatorsSection {
    fn name(&self) -> &str {
        "operators"
    }

    fn title(&self) -> &str {
        "Operators"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = vec![
            format!("10 + 5 = {}", 10 + 5),
            format!("10 / 3 = {} (truncating)", truncating_div(10, 3)),
            format!("10 % 3 = {}", 10 % 3),
            format!("2.pow(3) = {}", power(2, 3)),
        ];

        let age = 25;
        let is_active = true;
        if is_active_adult(age, is_active) {
            lines.push("Adult and active".to_string());
        }

        let mut counter = 0;
        counter += 1;
        lines.push(format!("counter after += 1: {counter}"));

        Ok(lines)
    }
}
