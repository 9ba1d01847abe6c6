//! Built-in pipeline phases.

mod validate;

pub use validate::{
    DuplicateClassLint, DuplicatePropertyLint, EmptyClassLint, Lint, NameCollisionLint,
    PropertyNamingLint, ValidatePhase,
};
