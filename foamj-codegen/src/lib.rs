//! Java source emission for FOAM class models.
//!
//! A class model is translated into a small Java AST by the
//! [`hooks::ClassHook`] and its extensions; every node then renders itself
//! into a shared [`builder::Outputter`].
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware output buffer and the [`builder::OutputJava`] trait
//! - [`ast`] - Java AST nodes (Class, Method, Field, ClassInfo, PropertyInfo, ...)
//! - [`hooks`] - Model-to-AST translation (class, property, constructor, method)
//! - [`pipeline`] - Manifest lints and diagnostics
//! - [`generator`] - One `.java` file per manifest class

pub mod ast;
pub mod builder;
mod error;
pub mod generator;
pub mod hooks;
pub mod pipeline;

pub use error::{Error, Result};
pub use generator::{GeneratedFile, GenerationResult, Generator};
