//! Lint for generated Java members that would share a name.

use std::collections::{HashMap, HashSet};

use foamj_core::{capitalize, constantize};
use foamj_model::{ClassModel, Manifest};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Members every generated class declares for its registry.
const REGISTRY_FIELDS: [&str; 1] = ["classInfo_"];
const REGISTRY_METHODS: [(&str, usize); 2] = [("getClassInfo", 0), ("getOwnClassInfo", 0)];

/// Lint that errors when a property's generated names clash.
///
/// Each property becomes a `<name>_` field, a `CONSTANT` and a
/// `get<Name>`/`set<Name>` pair. Two different property names can map to the
/// same members (`firstName` and `first_name` both give `FIRST_NAME`), and a
/// property can shadow the registry or a model method. Methods are compared by
/// name and argument count.
pub struct NameCollisionLint;

impl Lint for NameCollisionLint {
    fn name(&self) -> &'static str {
        "name-collision"
    }

    fn description(&self) -> &'static str {
        "Detect properties whose generated Java members clash"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for cls in &manifest.classes {
            check_class(cls, diagnostics);
        }
    }
}

/// Who declared a generated member.
#[derive(Clone, Copy)]
enum Owner<'a> {
    Registry,
    Property(&'a str),
}

impl std::fmt::Display for Owner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Registry => write!(f, "the class registry"),
            Owner::Property(name) => write!(f, "property '{}'", name),
        }
    }
}

fn check_class(cls: &ClassModel, diagnostics: &mut Vec<Diagnostic>) {
    let mut fields: HashMap<String, Owner> = REGISTRY_FIELDS
        .iter()
        .map(|f| (f.to_string(), Owner::Registry))
        .collect();
    let mut methods: HashMap<(String, usize), Owner> = REGISTRY_METHODS
        .iter()
        .map(|(m, arity)| ((m.to_string(), *arity), Owner::Registry))
        .collect();

    // Exact repeats are reported by duplicate-property
    let mut seen = HashSet::new();

    for prop in &cls.properties {
        if !seen.insert(prop.name.as_str()) {
            continue;
        }
        let location = format!("classes.{}.properties.{}", cls.name, prop.name);
        let capitalized = capitalize(&prop.name);

        let generated_fields = [format!("{}_", prop.name), constantize(&prop.name)];
        let generated_methods = [
            (format!("get{}", capitalized), 0),
            (format!("set{}", capitalized), 1),
        ];

        let mut clash = None;
        for field in generated_fields {
            if let Some(owner) = fields.get(&field) {
                clash.get_or_insert((field.clone(), *owner));
            } else {
                fields.insert(field, Owner::Property(&prop.name));
            }
        }
        for key in generated_methods {
            if let Some(owner) = methods.get(&key) {
                clash.get_or_insert((key.0.clone(), *owner));
            } else {
                methods.insert(key, Owner::Property(&prop.name));
            }
        }

        if let Some((member, owner)) = clash {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "property '{}' in class '{}' generates '{}', which clashes with {}",
                        prop.name, cls.name, member, owner
                    ),
                )
                .at(location),
            );
        }
    }

    for method in &cls.methods {
        let key = (method.name.clone(), method.args.len());
        if let Some(owner) = methods.get(&key) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "method '{}' in class '{}' clashes with a method generated for {}",
                        method.name, cls.name, owner
                    ),
                )
                .at(format!("classes.{}.methods.{}", cls.name, method.name)),
            );
        }
    }
}
