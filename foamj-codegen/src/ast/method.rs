//! Method and constructor declarations.

use foamj_core::Visibility;

use super::{Argument, Code};
use crate::{
    Result,
    builder::{OutputJava, Outputter},
    error::require,
};

/// A method declaration with a statement body.
///
/// A method without a return type renders as a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    visibility: Visibility,
    is_static: bool,
    return_type: Option<String>,
    args: Vec<Argument>,
    body: Code,
}

impl Method {
    /// Create a method returning `return_type`; name and type are required.
    pub fn try_new(name: impl Into<String>, return_type: impl Into<String>) -> Result<Self> {
        let (name, return_type) = (name.into(), return_type.into());
        require(&name, "method", "name")?;
        require(&return_type, "method", "type")?;
        Ok(Self::with_parts(name, Some(return_type)))
    }

    /// Create a constructor for the named class.
    pub fn constructor(class_name: impl Into<String>) -> Result<Self> {
        let name = class_name.into();
        require(&name, "constructor", "name")?;
        Ok(Self::with_parts(name, None))
    }

    fn with_parts(name: String, return_type: Option<String>) -> Self {
        Self {
            name,
            visibility: Visibility::default(),
            is_static: false,
            return_type,
            args: Vec::new(),
            body: Code::default(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn arg(mut self, arg: Argument) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = Argument>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn body(mut self, body: impl Into<Code>) -> Self {
        self.body = body.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.args
    }

    pub fn code(&self) -> &Code {
        &self.body
    }
}

impl OutputJava for Method {
    fn output_java(&self, out: &mut Outputter) {
        out.indent();
        if self.visibility != Visibility::Package {
            out.out(self.visibility.as_str()).out(" ");
        }
        if self.is_static {
            out.out("static ");
        }
        if let Some(ty) = &self.return_type {
            out.out(ty).out(" ");
        }
        out.out(&self.name).out("(");
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.out(", ");
            }
            out.out(arg);
        }
        out.out(") {\n");

        out.increase_indent();
        out.out(&self.body);
        out.decrease_indent();
        out.indent().out("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_method_with_args() {
        let method = Method::try_new("setAge", "Person")
            .unwrap()
            .arg(Argument::try_new("val", "int").unwrap())
            .body("age_ = val;\nreturn this;");
        assert_eq!(
            method.to_java(),
            "public Person setAge(int val) {\n  age_ = val;\n  return this;\n}"
        );
    }

    #[test]
    fn test_args_are_comma_joined() {
        let method = Method::try_new("compare", "int")
            .unwrap()
            .arg(Argument::try_new("o1", "Object").unwrap())
            .arg(Argument::try_new("o2", "Object").unwrap());
        assert!(
            method
                .to_java()
                .starts_with("public int compare(Object o1, Object o2) {\n")
        );
    }

    #[test]
    fn test_static_package_private() {
        let method = Method::try_new("getOwnClassInfo", "foam.core.ClassInfo")
            .unwrap()
            .visibility(Visibility::Package)
            .static_()
            .body("return classInfo_;");
        assert_eq!(
            method.to_java(),
            "static foam.core.ClassInfo getOwnClassInfo() {\n  return classInfo_;\n}"
        );
    }

    #[test]
    fn test_constructor_has_no_return_type() {
        let ctor = Method::constructor("Person").unwrap();
        assert!(ctor.is_constructor());
        assert_eq!(ctor.to_java(), "public Person() {\n}");
    }

    #[test]
    fn test_indent_is_balanced() {
        let mut out = Outputter::java();
        out.increase_indent();
        out.out(&Method::try_new("run", "void").unwrap().body("go();"));
        assert_eq!(out.level(), 1);
        assert_eq!(out.build(), "  public void run() {\n    go();\n  }");
    }

    #[test]
    fn test_requires_name_and_type() {
        assert_eq!(
            Method::try_new("", "void").unwrap_err(),
            Error::MissingField {
                node: "method",
                field: "name"
            }
        );
        assert!(Method::try_new("run", "").is_err());
    }
}
