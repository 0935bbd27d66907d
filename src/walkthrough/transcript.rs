//! Transcript of an executed walkthrough

use serde::Serialize;

/// Output of one executed section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    pub name: String,
    pub title: String,
    pub lines: Vec<String>,
}

/// Ordered collection of section reports for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub sections: Vec<SectionReport>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Transcript {
            sections: Vec::new(),
        }
    }

    /// Append a section report
    pub fn push(&mut self, report: SectionReport) {
        self.sections.push(report);
    }

    /// Number of executed sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether any section ran
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over section reports in execution order
    pub fn iter(&self) -> impl Iterator<Item = &SectionReport> {
        self.sections.iter()
    }
}
