//! Section registry holding the walkthrough's demonstrations in order
//!
//! Unlike a name-keyed registry, the backing store is a `Vec`: the
//! walkthrough's section order is fixed and semantically meaningful, so
//! iteration yields sections in registration order.

use crate::walkthrough::section::Section;
use crate::walkthrough::sections;

/// Ordered registry of demonstration sections
pub struct SectionRegistry {
    sections: Vec<Box<dyn Section>>,
}

impl SectionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SectionRegistry {
            sections: Vec::new(),
        }
    }

    /// Register a section at the end of the walkthrough order
    ///
    /// Names are expected to be unique; lookup returns the first match.
    pub fn register<S: Section + 'static>(&mut self, section: S) {
        self.sections.push(Box::new(section));
    }

    /// Get a section by name
    pub fn get(&self, name: &str) -> Option<&dyn Section> {
        self.sections
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Check if a section exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over sections in walkthrough order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Section> {
        self.sections.iter().map(|s| s.as_ref())
    }

    /// All section names in walkthrough order
    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name().to_string()).collect()
    }

    /// Number of registered sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Create a registry with the full walkthrough in its fixed order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(sections::values::ValuesSection);
        registry.register(sections::operators::OperatorsSection);
        registry.register(sections::control_flow::ControlFlowSection);
        registry.register(sections::containers::ContainersSection);
        registry.register(sections::functions::FunctionsSection);
        registry.register(sections::modules::ModulesSection);
        registry.register(sections::file_io::FileIoSection::new());
        registry.register(sections::objects::ObjectsSection);
        registry.register(sections::errors::ErrorsSection);
        registry.register(sections::generators::GeneratorsSection);
        registry.register(sections::decorators::DecoratorsSection);

        registry
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkthrough::section::SectionError;

    // Test section
    struct TestSection;
    impl Section for TestSection {
        fn name(&self) -> &str {
            "test"
        }
        fn title(&self) -> &str {
            "Test Section"
        }
        fn run(&self) -> Result<Vec<String>, SectionError> {
            Ok(vec!["test output".to_string()])
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = SectionRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = SectionRegistry::new();
        registry.register(TestSection);

        assert!(registry.has("test"));
        let section = registry.get("test");
        assert!(section.is_some());
        assert_eq!(section.unwrap().title(), "Test Section");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = SectionRegistry::new();
        assert!(registry.get("nonexistent").is_none());
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn test_registry_preserves_registration_order() {
        let registry = SectionRegistry::with_defaults();
        let names = registry.section_names();
        assert_eq!(
            names,
            vec![
                "values",
                "operators",
                "control-flow",
                "containers",
                "functions",
                "modules",
                "file-io",
                "objects",
                "errors",
                "generators",
                "decorators",
            ]
        );
    }

    #[test]
    fn test_registry_with_defaults_has_eleven_sections() {
        let registry = SectionRegistry::with_defaults();
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn test_registry_default_trait() {
        let registry = SectionRegistry::default();
        assert!(registry.has("generators"));
        assert!(registry.has("decorators"));
    }
}
