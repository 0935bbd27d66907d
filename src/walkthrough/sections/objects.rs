//! Object model: fields with behavior, dynamic dispatch, associated functions

use crate::walkthrough::section::{Section, SectionError};
use std::any::type_name;

/// A concrete type holding one field and one behavior
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn bark(&self) -> String {
        format!("{} says Woof!", self.name)
    }
}

/// Shared behavior with a default implementation
pub trait Animal {
    fn speak(&self) -> &'static str {
        "Some sound"
    }
}

/// Keeps the trait's default behavior
pub struct Creature;

impl Animal for Creature {}

/// Overrides the default behavior
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow"
    }
}

/// Behavior invocable without any instance
pub struct MathHelper;

impl MathHelper {
    pub fn add(a: i64, b: i64) -> i64 {
        a + b
    }

    /// Report this type's own (module-path-free) name
    pub fn info() -> String {
        let full = type_name::<Self>();
        let short = full.rsplit("::").next().unwrap_or(full);
        format!("this is {short}")
    }
}

pub struct ObjectsSection;

impl Section for ObjectsSection {
    fn name(&self) -> &str {
        "objects"
    }

    fn title(&self) -> &str {
        "Object Model"
    }

    fn run(&self) -> Result<Vec<String>, SectionError> {
        let mut lines = Vec::new();

        let my_dog = Dog::new("Buddy");
        lines.push(format!("dog: {}", my_dog.bark()));

        // Dispatch goes through the trait object, so Cat's override wins
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Creature), Box::new(Cat)];
        for animal in &animals {
            lines.push(format!("animal speaks: {}", animal.speak()));
        }

        lines.push(format!("MathHelper::add(5, 7): {}", MathHelper::add(5, 7)));
        lines.push(format!("MathHelper::info(): {}", MathHelper::info()));

        Ok(lines)
    }
}
