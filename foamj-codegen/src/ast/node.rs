//! The closed set of renderable AST nodes.

use super::{Argument, Class, ClassInfo, Code, Expr, Field, Method, PropertyInfo};
use crate::builder::{OutputJava, Outputter};

/// Any Java AST node.
///
/// Used where a slot accepts more than one node kind, such as a field
/// initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Code(Code),
    Expr(Expr),
    Argument(Argument),
    Method(Method),
    Field(Field),
    Class(Class),
    ClassInfo(ClassInfo),
    PropertyInfo(PropertyInfo),
}

impl OutputJava for Node {
    fn output_java(&self, out: &mut Outputter) {
        match self {
            Node::Code(n) => n.output_java(out),
            Node::Expr(n) => n.output_java(out),
            Node::Argument(n) => n.output_java(out),
            Node::Method(n) => n.output_java(out),
            Node::Field(n) => n.output_java(out),
            Node::Class(n) => n.output_java(out),
            Node::ClassInfo(n) => n.output_java(out),
            Node::PropertyInfo(n) => n.output_java(out),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Code,
    Expr,
    Argument,
    Method,
    Field,
    Class,
    ClassInfo,
    PropertyInfo
);

/// Bare strings become inline expressions.
impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Expr(Expr::new(text))
    }
}
