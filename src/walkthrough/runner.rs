//! Runner that executes the walkthrough's sections

use crate::walkthrough::registry::SectionRegistry;
use crate::walkthrough::section::Section;
use crate::walkthrough::transcript::{SectionReport, Transcript};
use std::fmt;

/// Errors during walkthrough execution
#[derive(Debug, Clone)]
pub enum WalkthroughError {
    SectionNotFound(String),
    SectionFailed { section: String, message: String },
}

impl fmt::Display for WalkthroughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkthroughError::SectionNotFound(name) => {
                write!(f, "Section '{name}' not found")
            }
            WalkthroughError::SectionFailed { section, message } => {
                write!(f, "Section '{section}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for WalkthroughError {}

/// Executes demonstration sections into transcripts
pub struct Walkthrough {
    registry: SectionRegistry,
}

impl Walkthrough {
    /// Create a walkthrough with the default sections
    pub fn new() -> Self {
        Self {
            registry: SectionRegistry::with_defaults(),
        }
    }

    /// Create a walkthrough with a custom registry
    pub fn with_registry(registry: SectionRegistry) -> Self {
        Self { registry }
    }

    /// Run every section in walkthrough order
    pub fn run_all(&self) -> Result<Transcript, WalkthroughError> {
        let mut transcript = Transcript::new();
        for section in self.registry.iter() {
            transcript.push(self.run_one(section)?);
        }
        Ok(transcript)
    }

    /// Run a single section by name
    ///
    /// The result is a one-section transcript so renderers apply uniformly.
    pub fn run_section(&self, name: &str) -> Result<Transcript, WalkthroughError> {
        let section = self
            .registry
            .get(name)
            .ok_or_else(|| WalkthroughError::SectionNotFound(name.to_string()))?;

        let mut transcript = Transcript::new();
        transcript.push(self.run_one(section)?);
        Ok(transcript)
    }

    fn run_one(&self, section: &dyn Section) -> Result<SectionReport, WalkthroughError> {
        let lines = section
            .run()
            .map_err(|e| WalkthroughError::SectionFailed {
                section: section.name().to_string(),
                message: e.to_string(),
            })?;

        Ok(SectionReport {
            name: section.name().to_string(),
            title: section.title().to_string(),
            lines,
        })
    }

    /// Get the registry
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkthrough::section::SectionError;

    struct FailingSection;
    impl Section for FailingSection {
        fn name(&self) -> &str {
            "failing"
        }
        fn title(&self) -> &str {
            "Failing Section"
        }
        fn run(&self) -> Result<Vec<String>, SectionError> {
            Err(SectionError::Io("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_walkthrough_creation() {
        let walkthrough = Walkthrough::new();
        assert_eq!(walkthrough.registry().len(), 11);
    }

    #[test]
    fn test_run_section_by_name() {
        let walkthrough = Walkthrough::new();
        let transcript = walkthrough.run_section("generators").unwrap();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.sections[0].name, "generators");
        assert!(!transcript.sections[0].lines.is_empty());
    }

    #[test]
    fn test_run_section_not_found() {
        let walkthrough = Walkthrough::new();
        let result = walkthrough.run_section("nonexistent");

        match result.unwrap_err() {
            WalkthroughError::SectionNotFound(name) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected SectionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_run_failing_section_reports_name() {
        let mut registry = SectionRegistry::new();
        registry.register(FailingSection);
        let walkthrough = Walkthrough::with_registry(registry);

        match walkthrough.run_all().unwrap_err() {
            WalkthroughError::SectionFailed { section, message } => {
                assert_eq!(section, "failing");
                assert!(message.contains("disk on fire"));
            }
            other => panic!("Expected SectionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_walkthrough_error_display() {
        let err1 = WalkthroughError::SectionNotFound("test".into());
        assert_eq!(format!("{err1}"), "Section 'test' not found");

        let err2 = WalkthroughError::SectionFailed {
            section: "test".into(),
            message: "boom".into(),
        };
        assert_eq!(format!("{err2}"), "Section 'test' failed: boom");
    }
}
