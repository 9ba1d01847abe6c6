//! Indentation-aware output buffer for Java emission.

use super::Indent;

/// Something that can write itself into an [`Outputter`].
///
/// Plain strings append their text verbatim; AST nodes render themselves
/// with the outputter as target, calling back into it for nested nodes.
pub trait OutputJava {
    /// Write this value into the outputter.
    fn output_java(&self, out: &mut Outputter);

    /// Render into a fresh outputter with the default indentation.
    fn to_java(&self) -> String {
        let mut out = Outputter::java();
        self.output_java(&mut out);
        out.build()
    }
}

impl OutputJava for str {
    fn output_java(&self, out: &mut Outputter) {
        out.raw(self);
    }
}

impl OutputJava for String {
    fn output_java(&self, out: &mut Outputter) {
        out.raw(self);
    }
}

/// Shared accumulator for one render pass.
///
/// Tracks the current indent level and the output buffer. Nodes are
/// responsible for keeping the level balanced: every
/// [`increase_indent`](Self::increase_indent) is matched by a
/// [`decrease_indent`](Self::decrease_indent) before the node returns.
///
/// # Example
///
/// ```
/// use foamj_codegen::builder::Outputter;
///
/// let mut out = Outputter::java();
/// out.indent().out("class A {").out("\n");
/// out.increase_indent();
/// out.indent().out("int x;").out("\n");
/// out.decrease_indent();
/// out.indent().out("}");
///
/// assert_eq!(out.build(), "class A {\n  int x;\n}");
/// ```
#[derive(Debug, Clone)]
pub struct Outputter {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl Outputter {
    /// Create a new Outputter with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new Outputter with 2-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Append the indent string once per current level.
    pub fn indent(&mut self) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
        self
    }

    /// Append a string or render a node.
    pub fn out(&mut self, item: &(impl OutputJava + ?Sized)) -> &mut Self {
        item.output_java(self);
        self
    }

    /// Append text without indentation or newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Append an indented line followed by a newline.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn increase_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn decrease_indent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Current indent level.
    pub fn level(&self) -> usize {
        self.indent_level
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the outputter and return the buffer.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for Outputter {
    fn default() -> Self {
        Self::java()
    }
}
