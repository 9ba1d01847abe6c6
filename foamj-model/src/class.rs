//! Class, property and method models.

use foamj_core::Visibility;
use serde::Deserialize;

use crate::PropertyKind;

/// Parent name that maps to FOAM's base implementation class.
pub const FOBJECT: &str = "FObject";

fn default_extends() -> String {
    FOBJECT.to_string()
}

/// A FOAM class model (one `[[classes]]` entry).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassModel {
    /// Simple class name
    pub name: String,

    /// Java package; filled from `[project].package` when omitted
    #[serde(default)]
    pub package: Option<String>,

    /// Parent class; `FObject` unless given
    #[serde(default = "default_extends")]
    pub extends: String,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Interfaces the generated class implements
    #[serde(default)]
    pub implements: Vec<String>,

    /// Extra imports, as fully qualified names
    #[serde(default)]
    pub imports: Vec<String>,

    /// Constructor variants to generate, in order
    #[serde(default)]
    pub constructors: Vec<ConstructorKind>,

    /// Properties, in declaration order
    #[serde(default)]
    pub properties: Vec<PropertyModel>,

    /// Hand-written Java methods
    #[serde(default)]
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    /// Fully qualified class name (e.g. "com.example.Person").
    pub fn qualified_name(&self) -> String {
        match self.package.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{}.{}", pkg, self.name),
            _ => self.name.clone(),
        }
    }

    /// Whether the parent is FOAM's base object.
    pub fn extends_fobject(&self) -> bool {
        self.extends == FOBJECT
    }

    /// Find a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A property model (one `[[classes.properties]]` entry).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyModel {
    pub name: String,

    /// FOAM property type (e.g. "String", "Int")
    #[serde(rename = "type")]
    pub type_name: String,

    /// Overrides the Java field type
    #[serde(default)]
    pub java_type: Option<String>,

    /// Overrides the `PropertyInfo` base class
    #[serde(default)]
    pub java_info_type: Option<String>,

    /// Overrides the JSON parser class
    #[serde(default)]
    pub java_json_parser: Option<String>,
}

impl PropertyModel {
    /// Create a property with the given name and FOAM type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            java_type: None,
            java_info_type: None,
            java_json_parser: None,
        }
    }

    /// The resolved property kind, if the type name is known.
    pub fn kind(&self) -> Option<PropertyKind> {
        self.type_name.parse().ok()
    }

    /// Java type of the backing field.
    pub fn java_type(&self) -> Option<String> {
        self.java_type
            .clone()
            .or_else(|| self.kind().map(|k| k.java_type().to_string()))
    }

    /// Base class of the generated `PropertyInfo`.
    pub fn java_info_type(&self) -> Option<String> {
        self.java_info_type
            .clone()
            .or_else(|| self.kind().map(|k| k.java_info_type().to_string()))
    }

    /// JSON parser class.
    pub fn java_json_parser(&self) -> Option<String> {
        self.java_json_parser
            .clone()
            .or_else(|| self.kind().map(|k| k.java_json_parser().to_string()))
    }
}

/// Constructor variants contributed to a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorKind {
    /// No-argument constructor
    Default,
    /// One argument per property, assigned through the setters
    All,
}

/// A hand-written method (one `[[classes.methods]]` entry).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodModel {
    pub name: String,

    /// Return type; `void` when omitted
    #[serde(default, rename = "type")]
    pub return_type: Option<String>,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default)]
    pub args: Vec<ArgModel>,

    /// Java statements, one per line
    #[serde(default)]
    pub body: String,
}

impl MethodModel {
    /// The declared return type, defaulting to `void`.
    pub fn return_type(&self) -> &str {
        self.return_type.as_deref().unwrap_or("void")
    }
}

/// A method argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}
