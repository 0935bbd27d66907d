//! Decorators: wrapping a function with before/after announcements

use crate::walkthrough::section::{Section, SectionError};

/// Wrap `func` so each call emits a before line and an after line
///
/// The wrapper is transparent: the argument passes through untouched and the
/// original return value comes back unchanged. Lines go to `sink` rather than
/// straight to stdout so callers can capture them. Multiple arguments travel
/// as a tuple.
pub fn with_announcements<A, R, F, S>(func: F, mut sink: S) -> impl FnMut(A) -> R
where
    F: Fn(A) -> R,
    S: FnMut(&str),
{
    move |arg| {
        sink("before function call");
        let result = func(arg);
        sink("after function call");
        result
    }
}

pub struct DecoratorsSection;

impl Section for DecoratorsSection {
    fn name(&self) -> &str {
        "decorators"
    }

    fn title(&self) -> &str {
        "Decorators"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = Vec::new();

        let result = {
            let square = |x: i64| x * x;
            let mut wrapped = with_announcements(square, |line: &str| lines.push(line.to_string()));
            wrapped(4)
        };
        lines.push(format!("wrapped square(4): {result}"));

        Ok(lines)
    }
}
