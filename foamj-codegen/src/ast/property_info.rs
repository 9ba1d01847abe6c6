//! Per-property reflection accessors.

use foamj_core::capitalize;

use super::{Argument, Class, Method};
use crate::{
    Result,
    builder::{OutputJava, Outputter},
    error::require,
};

/// Inputs for a [`PropertyInfo`].
#[derive(Debug, Clone, Copy)]
pub struct PropertyInfoSpec<'a> {
    /// Simple name of the class that owns the property
    pub owner: &'a str,
    /// Property name (e.g. "firstName")
    pub name: &'a str,
    /// Java type of the property value
    pub java_type: &'a str,
    /// Base class of the accessor (e.g. "foam.core.AbstractStringPropertyInfo")
    pub info_type: &'a str,
    /// JSON parser class for the value
    pub json_parser: &'a str,
}

/// An anonymous subclass of the property's info type that reads and writes
/// the property on instances of its owning class.
///
/// The method list is computed once at construction from the owner, name,
/// type and parser; bodies call the owner's real getter and setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    prop_name: String,
    getter_name: String,
    setter_name: String,
    class: Class,
}

impl PropertyInfo {
    pub fn try_new(spec: PropertyInfoSpec<'_>) -> Result<Self> {
        require(spec.owner, "property info", "owner")?;
        require(spec.name, "property info", "name")?;
        require(spec.java_type, "property info", "type")?;
        require(spec.json_parser, "property info", "json parser")?;

        let getter_name = format!("get{}", capitalize(spec.name));
        let setter_name = format!("set{}", capitalize(spec.name));
        let owner = spec.owner;
        let ty = spec.java_type;

        let mut class = Class::anonymous(spec.info_type)?;
        class
            .method(
                Method::try_new("getName", "String")?
                    .body(format!("return \"{}\";", spec.name)),
            )
            .method(
                Method::try_new("get", "Object")?
                    .arg(Argument::try_new("o", "Object")?)
                    .body("return get_(o);"),
            )
            .method(
                Method::try_new("get_", ty)?
                    .arg(Argument::try_new("o", "Object")?)
                    .body(format!("return (({}) o).{}();", owner, getter_name)),
            )
            .method(
                Method::try_new("set", "void")?
                    .arg(Argument::try_new("o", "Object")?)
                    .arg(Argument::try_new("value", "Object")?)
                    .body(format!("(({}) o).{}(({}) value);", owner, setter_name, ty)),
            )
            .method(
                Method::try_new("compare", "int")?
                    .arg(Argument::try_new("o1", "Object")?)
                    .arg(Argument::try_new("o2", "Object")?)
                    .body("return compareValues(get_(o1), get_(o2));"),
            )
            .method(
                Method::try_new("jsonParser", "foam.lib.parse.Parser")?
                    .body(format!("return new {}();", spec.json_parser)),
            );

        Ok(Self {
            prop_name: spec.name.to_string(),
            getter_name,
            setter_name,
            class,
        })
    }

    pub fn prop_name(&self) -> &str {
        &self.prop_name
    }

    pub fn getter_name(&self) -> &str {
        &self.getter_name
    }

    pub fn setter_name(&self) -> &str {
        &self.setter_name
    }

    pub fn info_type(&self) -> &str {
        self.class.get_extends().unwrap_or_default()
    }

    pub fn methods(&self) -> &[Method] {
        self.class.methods()
    }
}

impl OutputJava for PropertyInfo {
    fn output_java(&self, out: &mut Outputter) {
        out.out(&self.class);
    }
}
