//! Built-in lints for manifest validation.

mod duplicate_class;
mod duplicate_property;
mod empty_class;
mod name_collision;
mod property_naming;

pub use duplicate_class::DuplicateClassLint;
pub use duplicate_property::DuplicatePropertyLint;
pub use empty_class::EmptyClassLint;
pub use name_collision::NameCollisionLint;
pub use property_naming::PropertyNamingLint;
