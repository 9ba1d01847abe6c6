//! Output primitives for Java emission.
//!
//! - [`Outputter`] - Indentation-aware string accumulator shared by a render pass
//! - [`OutputJava`] - Trait for anything that can be written to an outputter
//! - [`Indent`] - Indentation configuration

mod indent;
mod outputter;

pub use indent::Indent;
pub use outputter::{OutputJava, Outputter};
