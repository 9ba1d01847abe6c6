//! Validation pipeline run before code generation.
//!
//! A [`Pipeline`] runs phases over a [`CompilationContext`] that owns the
//! manifest and collects [`Diagnostic`]s. The built-in validate phase runs
//! the lints in [`phases`]; errors abort the run, warnings are kept for the
//! caller to report.
//!
//! # Example
//!
//! ```ignore
//! use foamj_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
