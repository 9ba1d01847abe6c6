use thiserror::Error;

/// Result type for AST construction and model translation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the Java AST.
///
/// Nodes refuse to be constructed from incomplete input instead of
/// rendering malformed Java.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{node} is missing required field '{field}'")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("cannot resolve Java type '{ty}' for {context}")]
    UnresolvedType { ty: String, context: String },
}

impl Error {
    pub(crate) fn missing(node: &'static str, field: &'static str) -> Self {
        Error::MissingField { node, field }
    }
}

/// Fail with `MissingField` when a required string is blank.
pub(crate) fn require(value: &str, node: &'static str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing(node, field));
    }
    Ok(())
}
