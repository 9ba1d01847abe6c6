//! Java AST nodes.
//!
//! Each node renders itself through [`OutputJava`](crate::builder::OutputJava).
//! Nodes that need a name or type validate it on construction, so a
//! successfully built tree always renders well-formed declarations.

mod argument;
mod class;
mod class_info;
mod code;
mod field;
mod method;
mod node;
mod property_info;

pub use argument::Argument;
pub use class::Class;
pub use class_info::ClassInfo;
pub use code::{Code, Expr};
pub use field::Field;
pub use method::Method;
pub use node::Node;
pub use property_info::{PropertyInfo, PropertyInfoSpec};
