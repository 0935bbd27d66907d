//! Main module for the walkthrough

pub mod registry;
pub mod render;
pub mod runner;
pub mod section;
pub mod sections;
pub mod transcript;

pub use registry::SectionRegistry;
pub use render::{Renderer, RendererRegistry};
pub use runner::{Walkthrough, WalkthroughError};
pub use section::{Section, SectionError};
pub use transcript::{SectionReport, Transcript};
