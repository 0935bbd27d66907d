//! Functions: defaults, closures, and multi-value returns

use crate::walkthrough::section::{Section, SectionError};

/// Return a greeting for the given name
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Sum of `x` and `y`, with `y` defaulting to 10 when absent
pub fn add(x: i64, y: Option<i64>) -> i64 {
    x + y.unwrap_or(10)
}

/// Sum and count of a sequence, returned together
pub fn stats(numbers: &[i64]) -> (i64, usize) {
    let total = numbers.iter().sum();
    let count = numbers.len();
    (total, count)
}

pub struct FunctionsSection;

impl Section for FunctionsSection {
    fn name(&self) -> &str {
        "functions"
    }

    fn title(&self) -> &str {
        "Functions"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let square = |x: i64| x * x;
        let (total, count) = stats(&[1, 2, 3]);

        Ok(vec![
            greet("Alice"),
            format!("add(5): {}", add(5, None)),
            format!("add(5, 20): {}", add(5, Some(20))),
            format!("square of 4: {}", square(4)),
            format!("total: {total}, count: {count}"),
        ])
    }
}
