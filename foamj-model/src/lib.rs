//! foam.toml class model parsing and validation.
//!
//! A manifest declares FOAM class models: a class name, package, parent,
//! ordered properties and hand-written methods. Parsing validates every
//! name and type up front so code generation never sees a malformed model.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod error;
mod kind;
mod manifest;

pub use class::{ArgModel, ClassModel, ConstructorKind, FOBJECT, MethodModel, PropertyModel};
pub use error::{Error, Result};
pub use kind::PropertyKind;
pub use manifest::{FoamToml, IndentSetting, Manifest, ParseContext, ProjectConfig};
