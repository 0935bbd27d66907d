//! Control flow: branching, counting loops, early exit and skip

use crate::walkthrough::section::{Section, SectionError};

/// Three-way age classification; first matching branch wins
pub fn classify_age(age: i64) -> &'static str {
    if age >= 18 {
        "Adult"
    } else if age >= 13 {
        "Teen"
    } else {
        "Child"
    }
}

/// Scan `0..limit`, stopping at the sentinel and skipping even values
///
/// Returns the odd values strictly below the sentinel, in scan order.
pub fn odds_before_sentinel(limit: i64, sentinel: i64) -> Vec<i64> {
    let mut kept = Vec::new();
    for num in 0..limit {
        if num == sentinel {
            break;
        }
        if num % 2 == 0 {
            continue;
        }
        kept.push(num);
    }
    kept
}

pub struct ControlFlowSection;

impl Section for ControlFlowSection {
    fn name(&self) -> &str {
        "control-flow"
    }

    fn title(&self) -> &str {
        "Control Flow"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = Vec::new();

        let age = 25;
        lines.push(format!("age {age} -> {}", classify_age(age)));

        for i in 0..5 {
            lines.push(format!("for loop iteration: {i}"));
        }

        let mut count = 0;
        while count < 5 {
            lines.push(format!("while loop iteration: {count}"));
            count += 1;
        }

        for num in odds_before_sentinel(10, 5) {
            lines.push(format!("break/continue kept: {num}"));
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_age_branches() {
        assert_eq!(classify_age(25), "Adult");
        assert_eq!(classify_age(18), "Adult");
        assert_eq!(classify_age(15), "Teen");
        assert_eq!(classify_age(13), "Teen");
        assert_eq!(classify_age(7), "Child");
    }

    #[test]
    fn test_odds_before_sentinel() {
        assert_eq!(odds_before_sentinel(10, 5), vec![1, 3]);
    }

    #[test]
    fn test_odds_before_sentinel_never_reached() {
        // Sentinel outside the range: only the skip rule applies
        assert_eq!(odds_before_sentinel(6, 100), vec![1, 3, 5]);
    }

    #[test]
    fn test_section_loop_counts() {
        let lines = ControlFlowSection.run().unwrap();
        let for_lines = lines.iter().filter(|l| l.starts_with("for loop")).count();
        let while_lines = lines.iter().filter(|l| l.starts_with("while loop")).count();
        assert_eq!(for_lines, 5);
        assert_eq!(while_lines, 5);
    }
}
