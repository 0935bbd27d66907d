//! Generators: a lazy, finite, strictly-descending integer sequence

use crate::walkthrough::section::{Section, SectionError};

/// Lazy countdown from a starting value down to 1 inclusive
///
/// Each element is computed when the consumer requests it; once exhausted
/// the iterator stays exhausted.
pub struct Countdown {
    current: u32,
}

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.current == 0 {
            return None;
        }
        let value = self.current;
        self.current -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current as usize;
        (remaining, Some(remaining))
    }
}

/// Create a countdown yielding `n, n-1, ..., 1` (empty for `n == 0`)
pub fn countdown(n: u32) -> Countdown {
    Countdown { current: n }
}

pub struct GeneratorsSection;

impl Section for GeneratorsSection {
    fn name(&self) -> &str {
        "generators"
    }

    fn title(&self) -> &str {
        "Generators"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        Ok(countdown(5)
            .map(|number| format!("countdown: {number}"))
            .collect())
    }
}
