//! The per-class property registry.

use crate::builder::{OutputJava, Outputter};

/// Registry of a class's property constants, rendered as a builder chain:
///
/// ```text
/// new ClassInfo()
///   .addProperty(Person.FIRST_NAME)
///   .addProperty(Person.AGE)
/// ```
///
/// Properties keep their registration order. The owning field supplies the
/// terminating `;`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    properties: Vec<String>,
}

impl ClassInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property constant reference (e.g. "Person.AGE").
    pub fn add_property(&mut self, id: impl Into<String>) -> &mut Self {
        self.properties.push(id.into());
        self
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }
}

impl OutputJava for ClassInfo {
    fn output_java(&self, out: &mut Outputter) {
        out.out("new ClassInfo()");
        for id in &self.properties {
            out.out("\n").indent().out(".addProperty(").out(id).out(")");
        }
    }
}
