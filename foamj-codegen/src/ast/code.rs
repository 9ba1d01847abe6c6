//! Statement blocks and inline expressions.

use crate::builder::{OutputJava, Outputter};

/// A block of Java statements.
///
/// Every line is re-indented at the outputter's current level and
/// terminated with a newline. Blank lines carry no indentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    data: String,
}

impl Code {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&str> for Code {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for Code {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl OutputJava for Code {
    fn output_java(&self, out: &mut Outputter) {
        for line in self.data.lines() {
            if line.is_empty() {
                out.raw("\n");
            } else {
                out.line(line);
            }
        }
    }
}

/// An inline expression, written verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr(String);

impl Expr {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl OutputJava for Expr {
    fn output_java(&self, out: &mut Outputter) {
        out.raw(&self.0);
    }
}
