//! Model-to-AST translation hooks.
//!
//! The [`ClassHook`] turns a [`ClassModel`](foamj_model::ClassModel) into a
//! [`Class`](crate::ast::Class) node, then hands the class under
//! construction to every registered [`Extension`] in order. Extensions
//! receive the class's [`ClassInfo`](crate::ast::ClassInfo) registry
//! directly through the [`BuildContext`].
//!
//! Built-in extensions:
//! - [`PropertyExtension`] - field, accessors and `PropertyInfo` constant per property
//! - [`ConstructorExtension`] - no-argument and all-properties constructors
//! - [`MethodExtension`] - hand-written methods from the model

mod class;
mod constructor;
mod context;
mod extension;
mod method;
mod property;

pub use class::{CLASS_INFO_FIELD, ClassHook, FOBJECT_BASE};
pub use constructor::ConstructorExtension;
pub use context::BuildContext;
pub use extension::Extension;
pub use method::MethodExtension;
pub use property::{PropertyExtension, build_property};
