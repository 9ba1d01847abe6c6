//! FOAM property kinds and their Java mapping.

use std::{fmt, str::FromStr};

/// The FOAM property class a model property is declared with.
///
/// Each kind carries the Java field type, the `PropertyInfo` base class the
/// generated accessor extends, and the JSON parser used for the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    String,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Date,
    Object,
}

impl PropertyKind {
    /// All supported kinds, in display order.
    pub const ALL: [PropertyKind; 8] = [
        PropertyKind::String,
        PropertyKind::Int,
        PropertyKind::Long,
        PropertyKind::Float,
        PropertyKind::Double,
        PropertyKind::Boolean,
        PropertyKind::Date,
        PropertyKind::Object,
    ];

    /// The FOAM property class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::String => "String",
            PropertyKind::Int => "Int",
            PropertyKind::Long => "Long",
            PropertyKind::Float => "Float",
            PropertyKind::Double => "Double",
            PropertyKind::Boolean => "Boolean",
            PropertyKind::Date => "Date",
            PropertyKind::Object => "Object",
        }
    }

    /// The Java type of the backing field.
    pub fn java_type(&self) -> &'static str {
        match self {
            PropertyKind::String => "String",
            PropertyKind::Int => "int",
            PropertyKind::Long => "long",
            PropertyKind::Float => "float",
            PropertyKind::Double => "double",
            PropertyKind::Boolean => "boolean",
            PropertyKind::Date => "java.util.Date",
            PropertyKind::Object => "Object",
        }
    }

    /// The generated accessor's base class.
    pub fn java_info_type(&self) -> &'static str {
        match self {
            PropertyKind::String => "foam.core.AbstractStringPropertyInfo",
            PropertyKind::Int => "foam.core.AbstractIntPropertyInfo",
            PropertyKind::Long => "foam.core.AbstractLongPropertyInfo",
            PropertyKind::Float => "foam.core.AbstractFloatPropertyInfo",
            PropertyKind::Double => "foam.core.AbstractDoublePropertyInfo",
            PropertyKind::Boolean => "foam.core.AbstractBooleanPropertyInfo",
            PropertyKind::Date => "foam.core.AbstractDatePropertyInfo",
            PropertyKind::Object => "foam.core.AbstractObjectPropertyInfo",
        }
    }

    /// The JSON parser class for values of this kind.
    pub fn java_json_parser(&self) -> &'static str {
        match self {
            PropertyKind::String => "foam.lib.json.StringParser",
            PropertyKind::Int => "foam.lib.json.IntParser",
            PropertyKind::Long => "foam.lib.json.LongParser",
            PropertyKind::Float => "foam.lib.json.FloatParser",
            PropertyKind::Double => "foam.lib.json.DoubleParser",
            PropertyKind::Boolean => "foam.lib.json.BooleanParser",
            PropertyKind::Date => "foam.lib.json.DateParser",
            PropertyKind::Object => "foam.lib.json.AnyParser",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = String;

    /// Accepts FOAM class names and Java spellings, case-insensitively
    /// (e.g. "Int", "int", "integer").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "string" => Ok(PropertyKind::String),
            "int" | "integer" => Ok(PropertyKind::Int),
            "long" => Ok(PropertyKind::Long),
            "float" => Ok(PropertyKind::Float),
            "double" => Ok(PropertyKind::Double),
            "boolean" | "bool" => Ok(PropertyKind::Boolean),
            "date" | "java.util.date" => Ok(PropertyKind::Date),
            "object" | "any" => Ok(PropertyKind::Object),
            _ => Err(format!("unknown property type '{}'", s)),
        }
    }
}
