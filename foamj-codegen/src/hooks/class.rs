//! Class-level hook.

use foamj_core::Visibility;
use foamj_model::ClassModel;
use indexmap::IndexMap;
use tracing::debug;

use super::{
    BuildContext, ConstructorExtension, Extension, MethodExtension, PropertyExtension,
};
use crate::{
    Result,
    ast::{Class, Field, Method},
};

/// Java base class for models extending `FObject`.
pub const FOBJECT_BASE: &str = "foam.core.AbstractFObject";

/// Name of the static field holding a class's property registry.
pub const CLASS_INFO_FIELD: &str = "classInfo_";

const CLASS_INFO_TYPE: &str = "foam.core.ClassInfo";

/// Translates a class model into a [`Class`] node.
///
/// Sets up the class declaration, the `classInfo_` registry and its two
/// accessors, then runs each extension in order. The registry field is
/// always the last field of the generated class: Java runs static
/// initializers in source order, so every `PropertyInfo` constant it
/// registers must already be assigned.
///
/// # Example
///
/// ```ignore
/// let hook = ClassHook::new().with_extension(ToStringExtension);
/// let class = hook.build_java_class(&model)?;
/// let java = class.to_java();
/// ```
pub struct ClassHook {
    extensions: Vec<Box<dyn Extension>>,
    /// Qualified name -> simple name of classes that may be used as
    /// parents, in declaration order
    known_classes: IndexMap<String, String>,
}

impl ClassHook {
    /// Create a hook with the built-in extensions.
    pub fn new() -> Self {
        Self {
            extensions: vec![
                Box::new(PropertyExtension),
                Box::new(ConstructorExtension),
                Box::new(MethodExtension),
            ],
            known_classes: IndexMap::new(),
        }
    }

    /// Create a hook with no extensions.
    pub fn empty() -> Self {
        Self {
            extensions: Vec::new(),
            known_classes: IndexMap::new(),
        }
    }

    /// Add an extension to run after the existing ones.
    pub fn with_extension(mut self, extension: impl Extension + 'static) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Make sibling classes resolvable as parents across packages.
    ///
    /// A simple parent name resolves to the first class declared with it,
    /// the same class manifest validation finds.
    pub fn with_known_classes<'a>(
        mut self,
        classes: impl IntoIterator<Item = &'a ClassModel>,
    ) -> Self {
        for cls in classes {
            self.known_classes
                .entry(cls.qualified_name())
                .or_insert_with(|| cls.name.clone());
        }
        self
    }

    /// Get the names of all extensions, in run order.
    pub fn extension_names(&self) -> Vec<&'static str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Build the Java class for a model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is missing a required name or type.
    #[tracing::instrument(skip_all, fields(class = %model.name))]
    pub fn build_java_class(&self, model: &ClassModel) -> Result<Class> {
        let mut class = Class::try_new(&model.name)?
            .package(model.package.clone().unwrap_or_default())
            .abstract_(model.is_abstract)
            .extends(self.resolve_parent(model))
            .import(CLASS_INFO_TYPE);
        for import in &model.imports {
            class = class.import(import);
        }
        for iface in &model.implements {
            class = class.implements(iface);
        }

        class
            .method(
                Method::try_new("getClassInfo", CLASS_INFO_TYPE)?
                    .body(format!("return {};", CLASS_INFO_FIELD)),
            )
            .method(
                Method::try_new("getOwnClassInfo", CLASS_INFO_TYPE)?
                    .static_()
                    .body(format!("return {};", CLASS_INFO_FIELD)),
            );

        let mut ctx = BuildContext::new(model, class);
        for extension in &self.extensions {
            debug!(extension = extension.name(), "running extension");
            extension.build_java_class(&mut ctx)?;
        }

        let BuildContext {
            mut class,
            registry,
            ..
        } = ctx;
        debug!(
            properties = registry.properties().len(),
            "registering class info"
        );
        class.field(
            Field::try_new(CLASS_INFO_FIELD, CLASS_INFO_TYPE)?
                .visibility(Visibility::Private)
                .static_()
                .final_()
                .initializer(registry),
        );

        Ok(class)
    }

    /// Java name of the model's parent class.
    fn resolve_parent(&self, model: &ClassModel) -> String {
        if model.extends_fobject() {
            return FOBJECT_BASE.to_string();
        }

        let parent = self
            .known_classes
            .iter()
            .find(|(qualified, simple)| **simple == model.extends || **qualified == model.extends);

        match parent {
            Some((qualified, simple)) => {
                let parent_package = qualified.rsplit_once('.').map(|(pkg, _)| pkg);
                let own_package = model.package.as_deref().filter(|pkg| !pkg.is_empty());
                if parent_package == own_package {
                    simple.clone()
                } else {
                    qualified.clone()
                }
            }
            None => model.extends.clone(),
        }
    }
}

impl Default for ClassHook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use foamj_model::PropertyModel;

    use super::*;
    use crate::{builder::OutputJava, hooks::build_property};

    fn model(src: &str) -> ClassModel {
        toml::from_str(src).expect("Failed to parse test model")
    }

    #[test]
    fn test_fobject_maps_to_base() {
        let class = ClassHook::empty()
            .build_java_class(&model(r#"name = "Person""#))
            .unwrap();
        assert_eq!(class.get_extends(), Some(FOBJECT_BASE));
    }

    #[test]
    fn test_class_info_field_and_accessors() {
        let class = ClassHook::empty()
            .build_java_class(&model(r#"name = "Person""#))
            .unwrap();

        let info = class.fields().last().unwrap();
        assert_eq!(info.name(), CLASS_INFO_FIELD);
        assert!(info.is_static() && info.is_final());
        assert_eq!(info.ty(), "foam.core.ClassInfo");

        let names: Vec<_> = class.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["getClassInfo", "getOwnClassInfo"]);
        assert!(class.get_method("getOwnClassInfo").unwrap().is_static());
        assert!(!class.get_method("getClassInfo").unwrap().is_static());
    }

    #[test]
    fn test_extensions_run_in_order() {
        struct Marker(&'static str);

        impl Extension for Marker {
            fn name(&self) -> &'static str {
                self.0
            }

            fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
                ctx.class.method(Method::try_new(self.0, "void")?);
                Ok(())
            }
        }

        let hook = ClassHook::empty()
            .with_extension(Marker("first"))
            .with_extension(Marker("second"));
        assert_eq!(hook.extension_names(), ["first", "second"]);

        let class = hook.build_java_class(&model(r#"name = "A""#)).unwrap();
        let names: Vec<_> = class.methods().iter().map(|m| m.name()).collect();
        assert_eq!(names[2..], ["first", "second"]);
    }

    #[test]
    fn test_extension_registers_through_context() {
        struct Manual;

        impl Extension for Manual {
            fn name(&self) -> &'static str {
                "manual"
            }

            fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
                build_property(
                    &PropertyModel::new("code", "String"),
                    &mut ctx.class,
                    &mut ctx.registry,
                )
            }
        }

        let class = ClassHook::empty()
            .with_extension(Manual)
            .build_java_class(&model(r#"name = "Country""#))
            .unwrap();
        let java = class.to_java();
        assert!(java.contains("new ClassInfo()\n    .addProperty(Country.CODE);"));
    }

    #[test]
    fn test_parent_resolution() {
        let person = model(
            r#"
            name = "Person"
            package = "com.example.people"
            "#,
        );
        let employee = model(
            r#"
            name = "Employee"
            package = "com.example.hr"
            extends = "Person"
            "#,
        );
        let student = model(
            r#"
            name = "Student"
            package = "com.example.people"
            extends = "Person"
            "#,
        );

        let hook = ClassHook::empty().with_known_classes([&person, &employee, &student]);
        assert_eq!(
            hook.build_java_class(&employee).unwrap().get_extends(),
            Some("com.example.people.Person")
        );
        assert_eq!(
            hook.build_java_class(&student).unwrap().get_extends(),
            Some("Person")
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let person = model(
            r#"
            name = "Person"
            package = "com.example"
            constructors = ["default", "all"]

            [[properties]]
            name = "firstName"
            type = "String"

            [[properties]]
            name = "age"
            type = "Int"
            "#,
        );
        let hook = ClassHook::new();
        let first = hook.build_java_class(&person).unwrap().to_java();
        let second = hook.build_java_class(&person).unwrap().to_java();
        assert_eq!(first, second);
    }

    #[test]
    fn test_registry_initialized_after_property_constants() {
        let person = model(
            r#"
            name = "Person"

            [[properties]]
            name = "firstName"
            type = "String"

            [[properties]]
            name = "lastName"
            type = "String"
            "#,
        );
        let java = ClassHook::new().build_java_class(&person).unwrap().to_java();

        let registry = java.find("classInfo_ = new ClassInfo()").unwrap();
        for constant in ["FIRST_NAME = new", "LAST_NAME = new"] {
            assert!(java.find(constant).unwrap() < registry, "{constant}");
        }
    }

    #[test]
    fn test_shared_simple_name_resolves_to_first_declared() {
        let people = model(
            r#"
            name = "Person"
            package = "com.example.people"
            "#,
        );
        let legacy = model(
            r#"
            name = "Person"
            package = "com.example.legacy"
            "#,
        );
        let employee = model(
            r#"
            name = "Employee"
            package = "com.example.hr"
            extends = "Person"
            "#,
        );
        let archived = model(
            r#"
            name = "Archived"
            package = "com.example.legacy"
            extends = "com.example.legacy.Person"
            "#,
        );

        let hook = ClassHook::empty().with_known_classes([&people, &legacy, &employee, &archived]);
        assert_eq!(
            hook.build_java_class(&employee).unwrap().get_extends(),
            Some("com.example.people.Person")
        );
        assert_eq!(
            hook.build_java_class(&archived).unwrap().get_extends(),
            Some("Person")
        );
    }
}
