//! Core utilities for the foamj Java generator.
//!
//! This crate provides the naming helpers and file output types shared
//! by the model, codegen and CLI crates.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Fundamental types
pub use types::Visibility;
// String utilities
pub use utils::{capitalize, constantize, is_lower_camel_case, package_path};
