//! Class declarations and anonymous class expressions.

use foamj_core::Visibility;

use super::{Field, Method};
use crate::{
    Result,
    builder::{OutputJava, Outputter},
    error::require,
};

/// A Java class.
///
/// Named classes render as a full compilation unit (package, imports,
/// declaration, body). Anonymous classes render as `new Base()` followed
/// by a body only when they have members.
///
/// Fields always render before methods, each in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    package: Option<String>,
    visibility: Visibility,
    is_abstract: bool,
    extends: Option<String>,
    implements: Vec<String>,
    imports: Vec<String>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    anonymous: bool,
}

impl Class {
    /// Create a named class.
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        require(&name, "class", "name")?;
        Ok(Self::with_parts(name, None, false))
    }

    /// Create an anonymous class expression extending `base`.
    pub fn anonymous(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        require(&base, "anonymous class", "extends")?;
        Ok(Self::with_parts(String::new(), Some(base), true))
    }

    fn with_parts(name: String, extends: Option<String>, anonymous: bool) -> Self {
        Self {
            name,
            package: None,
            visibility: Visibility::Public,
            is_abstract: false,
            extends,
            implements: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            anonymous,
        }
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        let package = package.into();
        self.package = (!package.is_empty()).then_some(package);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn abstract_(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn implements(mut self, iface: impl Into<String>) -> Self {
        self.implements.push(iface.into());
        self
    }

    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Append a field.
    pub fn field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Append a method.
    pub fn method(&mut self, method: Method) -> &mut Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn get_extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }

    fn output_header(&self, out: &mut Outputter) {
        if let Some(pkg) = &self.package {
            out.out("package ").out(pkg).out(";\n\n");
        }

        if !self.imports.is_empty() {
            for import in &self.imports {
                out.out("import ").out(import).out(";\n");
            }
            out.out("\n");
        }

        if self.visibility != Visibility::Package {
            out.out(self.visibility.as_str()).out(" ");
        }
        if self.is_abstract {
            out.out("abstract ");
        }
        out.out("class ").out(&self.name);
        if let Some(base) = &self.extends {
            out.out(" extends ").out(base);
        }
        if !self.implements.is_empty() {
            out.out(" implements ").out(&self.implements.join(", "));
        }
    }

    fn output_body(&self, out: &mut Outputter) {
        out.out(" {\n");

        out.increase_indent();
        for field in &self.fields {
            out.out(field).out("\n");
        }
        for method in &self.methods {
            out.out(method).out("\n");
        }
        out.decrease_indent();
        out.indent().out("}");
    }
}

impl OutputJava for Class {
    fn output_java(&self, out: &mut Outputter) {
        if self.anonymous {
            out.out("new ")
                .out(self.extends.as_deref().unwrap_or_default())
                .out("()");
            if self.fields.is_empty() && self.methods.is_empty() {
                return;
            }
        } else {
            self.output_header(out);
        }

        self.output_body(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Argument, Expr};

    fn person() -> Class {
        let mut cls = Class::try_new("Person")
            .unwrap()
            .package("com.example")
            .extends("foam.core.AbstractFObject")
            .implements("java.io.Serializable")
            .implements("Cloneable");
        cls.field(
            Field::try_new("age_", "int")
                .unwrap()
                .visibility(Visibility::Private),
        )
        .method(
            Method::try_new("getAge", "int")
                .unwrap()
                .body("return age_;"),
        );
        cls
    }

    #[test]
    fn test_named_class() {
        assert_eq!(
            person().to_java(),
            "package com.example;\n\
             \n\
             public class Person extends foam.core.AbstractFObject implements java.io.Serializable, Cloneable {\n\
             \x20 private int age_;\n\
             \x20 public int getAge() {\n\
             \x20   return age_;\n\
             \x20 }\n\
             }"
        );
    }

    #[test]
    fn test_imports_and_abstract() {
        let cls = Class::try_new("Shape")
            .unwrap()
            .abstract_(true)
            .import("java.util.List");
        assert_eq!(
            cls.to_java(),
            "import java.util.List;\n\npublic abstract class Shape {\n}"
        );
    }

    #[test]
    fn test_anonymous_without_members() {
        let mut cls = Class::anonymous("Base").unwrap();
        assert_eq!(cls.to_java(), "new Base()");

        // A populated anonymous class carries its body
        cls.method(Method::try_new("run", "void").unwrap());
        assert_eq!(
            cls.to_java(),
            "new Base() {\n  public void run() {\n  }\n}"
        );
    }

    #[test]
    fn test_fields_render_before_methods() {
        let mut cls = Class::try_new("Order").unwrap();
        cls.method(Method::try_new("total", "double").unwrap())
            .field(Field::try_new("total_", "double").unwrap())
            .method(
                Method::try_new("add", "void")
                    .unwrap()
                    .arg(Argument::try_new("x", "double").unwrap()),
            )
            .field(
                Field::try_new("COUNT", "int")
                    .unwrap()
                    .static_()
                    .initializer(Expr::new("0")),
            );

        let java = cls.to_java();
        let field_end = java.rfind(';').unwrap();
        let method_start = java.find("public double total()").unwrap();
        assert!(field_end < method_start);
        assert!(java.find("total_;").unwrap() < java.find("COUNT = 0;").unwrap());
        assert!(java.find("total()").unwrap() < java.find("add(double x)").unwrap());
    }

    #[test]
    fn test_lookup_by_name() {
        let cls = person();
        assert_eq!(cls.get_field("age_").map(|f| f.ty()), Some("int"));
        assert!(cls.get_method("getAge").is_some());
        assert!(cls.get_method("setAge").is_none());
    }

    #[test]
    fn test_requires_name() {
        assert!(Class::try_new("").is_err());
        assert!(Class::anonymous("").is_err());
    }
}
