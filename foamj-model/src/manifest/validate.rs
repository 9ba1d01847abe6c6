//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, so nested validation can report where a
/// problem was found.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "foam.toml");
/// let cls_ctx = ctx.push("Person");
/// cls_ctx.validate_name("firstName", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Person", "firstName"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property in 'Person'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Require a non-empty value for a field.
    pub fn require(&self, value: &str, field: &str, kind: &str) -> Result<()> {
        if value.trim().is_empty() {
            let span = find_field_span(self.source.src(), field);
            return Err(self
                .source
                .missing_field_error(field, self.context_for(kind), span));
        }
        Ok(())
    }

    /// Validate that a name is a valid Java identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name such as a package or a qualified type.
    pub fn validate_qualified_name(&self, name: &str, kind: &str) -> Result<()> {
        for segment in name.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    name,
                    self.context_for(kind),
                    reason,
                    self.find_span(name),
                ));
            }
        }
        Ok(())
    }

    /// Report a type that cannot be resolved.
    pub fn unresolved_type(&self, ty: &str, kind: &str) -> Box<crate::Error> {
        self.source
            .unresolved_type_error(ty, self.context_for(kind), self.find_span(ty))
    }
}

/// Java reserved words that cannot be used as identifiers
/// Source: https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Reserved identifiers
    "_", "var", "yield", "record",
];

/// Check if a name is a Java reserved word
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for `name = "value"`, `type = "value"` and other quoted occurrences
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for key in ["name", "type", "extends", "package"] {
        for quote in ['"', '\''] {
            let pattern = format!("{} = {}{}{}", key, quote, name, quote);
            if let Some(pos) = src.find(&pattern) {
                let start = pos + key.len() + 4;
                return Some(SourceSpan::from((start, name.len())));
            }
        }
    }

    // Inside arrays like implements = ["a.B", "c.D"]
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of an empty `field = ""` assignment
pub(crate) fn find_field_span(src: &str, field: &str) -> Option<SourceSpan> {
    for pattern in [format!("{} = \"\"", field), format!("{} = ''", field)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos, pattern.len())));
        }
    }
    None
}

/// Validate that a name is a valid Java identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter, underscore or dollar sign
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or dollar sign"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, underscores and dollar signs");
    }

    if is_java_keyword(name) {
        return Some("name is a Java reserved word");
    }

    None
}
