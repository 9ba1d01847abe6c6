//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{ClassModel, Error, FOBJECT, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "foam.toml")
    }
}

impl Manifest {
    /// Parse a foam.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a foam.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
///
/// Classes without a package inherit `[project].package`.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    if let Some(pkg) = &manifest.project.package {
        for cls in manifest.classes.iter_mut().filter(|c| c.package.is_none()) {
            cls.package = Some(pkg.clone());
        }
    }

    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.require(&manifest.project.name, "name", "project")?;
    if let Some(pkg) = &manifest.project.package {
        ctx.validate_qualified_name(pkg, "package")?;
    }

    for cls in &manifest.classes {
        ctx.require(&cls.name, "name", "class")?;
        ctx.validate_name(&cls.name, "class")?;

        let cls_ctx = ctx.push(&cls.name);
        validate_class(manifest, cls, &cls_ctx)?;
    }
    Ok(())
}

fn validate_class<'a>(
    manifest: &'a Manifest,
    cls: &'a ClassModel,
    ctx: &ParseContext<'a>,
) -> Result<()> {
    if let Some(pkg) = cls.package.as_deref().filter(|p| !p.is_empty()) {
        ctx.validate_qualified_name(pkg, "package")?;
    }

    // The parent must be FObject, a manifest class, or a qualified Java name
    ctx.require(&cls.extends, "extends", "class")?;
    if cls.extends != FOBJECT && !manifest.has_class(&cls.extends) {
        if !cls.extends.contains('.') {
            return Err(ctx.unresolved_type(&cls.extends, "parent class"));
        }
        ctx.validate_qualified_name(&cls.extends, "parent class")?;
    }
    if cls.extends == cls.name || cls.extends == cls.qualified_name() {
        return Err(ctx.source_context().validation_error(
            format!("class '{}' cannot extend itself", cls.name),
            ctx.find_span(&cls.extends),
        ));
    }

    for iface in &cls.implements {
        ctx.validate_qualified_name(iface, "interface")?;
    }
    for import in &cls.imports {
        let path = import.strip_suffix(".*").unwrap_or(import);
        ctx.validate_qualified_name(path, "import")?;
    }

    for prop in &cls.properties {
        ctx.require(&prop.name, "name", "property")?;
        ctx.validate_name(&prop.name, "property")?;
        ctx.require(&prop.type_name, "type", "property")?;
        if prop.kind().is_none() {
            return Err(ctx.push(&prop.name).unresolved_type(&prop.type_name, "property"));
        }
    }

    for method in &cls.methods {
        ctx.require(&method.name, "name", "method")?;
        ctx.validate_name(&method.name, "method")?;

        let method_ctx = ctx.push(&method.name);
        for arg in &method.args {
            method_ctx.require(&arg.name, "name", "argument")?;
            method_ctx.validate_name(&arg.name, "argument")?;
            method_ctx.require(&arg.ty, "type", "argument")?;
        }
    }

    Ok(())
}
