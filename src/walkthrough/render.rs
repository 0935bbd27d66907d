//! Transcript renderers
//!
//! This module provides a pluggable registry of transcript renderers. Each
//! output format implements the `Renderer` trait and can be registered with
//! `RendererRegistry`. Text is the program's stdout surface; JSON and YAML
//! serialize the transcript structurally.

use crate::walkthrough::transcript::Transcript;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during rendering
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Renderer not found in registry
    RendererNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::RendererNotFound(name) => write!(f, "Format '{name}' not found"),
            RenderError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Trait for transcript renderers
pub trait Renderer: Send + Sync {
    /// The name of this format (e.g., "text", "json")
    fn name(&self) -> &str;

    /// Render a transcript to this format
    fn render(&self, transcript: &Transcript) -> Result<String, RenderError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Plain-text rendering: numbered section headers with indented lines
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn render(&self, transcript: &Transcript) -> Result<String, RenderError> {
        let mut out = String::new();
        for (index, report) in transcript.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}. {}\n", index + 1, report.title));
            for line in &report.lines {
                out.push_str(&format!("  {line}\n"));
            }
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Numbered plain-text walkthrough output"
    }
}

/// Pretty-printed JSON rendering of the transcript structure
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, transcript: &Transcript) -> Result<String, RenderError> {
        serde_json::to_string_pretty(transcript)
            .map_err(|e| RenderError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON transcript"
    }
}

/// YAML rendering of the transcript structure
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn name(&self) -> &str {
        "yaml"
    }

    fn render(&self, transcript: &Transcript) -> Result<String, RenderError> {
        serde_yaml::to_string(transcript)
            .map_err(|e| RenderError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML transcript"
    }
}

/// Registry of transcript renderers
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Render a transcript using the specified format
    pub fn render(&self, transcript: &Transcript, format: &str) -> Result<String, RenderError> {
        let renderer = self
            .get(format)
            .ok_or_else(|| RenderError::RendererNotFound(format.to_string()))?;
        renderer.render(transcript)
    }

    /// List all available format names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(TextRenderer);
        registry.register(JsonRenderer);
        registry.register(YamlRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkthrough::transcript::SectionReport;

    // Test renderer
    struct TestRenderer;
    impl Renderer for TestRenderer {
        fn name(&self) -> &str {
            "test"
        }
        fn render(&self, _transcript: &Transcript) -> Result<String, RenderError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test renderer"
        }
    }

    fn sample_transcript() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.push(SectionReport {
            name: "alpha".to_string(),
            title: "Alpha Things".to_string(),
            lines: vec!["one".to_string(), "two".to_string()],
        });
        transcript.push(SectionReport {
            name: "beta".to_string(),
            title: "Beta Things".to_string(),
            lines: vec!["three".to_string()],
        });
        transcript
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").unwrap().name(), "test");
        assert_eq!(registry.list_renderers(), vec!["test"]);
    }

    #[test]
    fn test_registry_render_not_found() {
        let registry = RendererRegistry::new();
        let result = registry.render(&Transcript::new(), "nonexistent");

        match result.unwrap_err() {
            RenderError::RendererNotFound(name) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected RendererNotFound error"),
        }
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = RendererRegistry::with_defaults();
        assert!(registry.has("text"));
        assert!(registry.has("json"));
        assert!(registry.has("yaml"));
        assert_eq!(registry.list_renderers(), vec!["json", "text", "yaml"]);
    }

    #[test]
    fn test_text_renderer_numbers_sections() {
        let output = TextRenderer.render(&sample_transcript()).unwrap();
        assert_eq!(
            output,
            "1. Alpha Things\n  one\n  two\n\n2. Beta Things\n  three\n"
        );
    }

    #[test]
    fn test_text_renderer_empty_transcript() {
        let output = TextRenderer.render(&Transcript::new()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_json_renderer_is_structured() {
        let output = JsonRenderer.render(&sample_transcript()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["sections"][0]["name"], "alpha");
        assert_eq!(parsed["sections"][1]["lines"][0], "three");
    }

    #[test]
    fn test_yaml_renderer_is_structured() {
        let output = YamlRenderer.render(&sample_transcript()).unwrap();
        assert!(output.contains("name: alpha"));
        assert!(output.contains("title: Beta Things"));
    }

    #[test]
    fn test_render_error_display() {
        let err1 = RenderError::RendererNotFound("test".to_string());
        assert_eq!(format!("{err1}"), "Format 'test' not found");

        let err2 = RenderError::SerializationError("error".to_string());
        assert_eq!(format!("{err2}"), "Serialization error: error");
    }
}
