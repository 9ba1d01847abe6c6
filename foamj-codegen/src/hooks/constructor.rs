//! Constructor variants.

use foamj_core::capitalize;
use foamj_model::ConstructorKind;
use tracing::debug;

use super::{BuildContext, Extension};
use crate::{
    Error, Result,
    ast::{Argument, Method},
};

/// Appends one constructor per requested [`ConstructorKind`].
///
/// The all-properties constructor takes one argument per property and
/// assigns each through its setter. For a class without properties it
/// would duplicate the no-argument constructor, so at most one
/// no-argument constructor is emitted.
pub struct ConstructorExtension;

impl Extension for ConstructorExtension {
    fn name(&self) -> &'static str {
        "constructors"
    }

    fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
        let model = ctx.model;
        let mut has_no_arg = false;

        for kind in &model.constructors {
            let ctor = match kind {
                ConstructorKind::Default => Method::constructor(&model.name)?,
                ConstructorKind::All => all_properties(ctx)?,
            };

            if ctor.arguments().is_empty() {
                if has_no_arg {
                    debug!(?kind, "skipping duplicate no-argument constructor");
                    continue;
                }
                has_no_arg = true;
            }
            ctx.class.method(ctor);
        }
        Ok(())
    }
}

fn all_properties(ctx: &BuildContext<'_>) -> Result<Method> {
    let mut args = Vec::with_capacity(ctx.model.properties.len());
    let mut body = Vec::with_capacity(ctx.model.properties.len());

    for prop in &ctx.model.properties {
        let ty = prop.java_type().ok_or_else(|| Error::UnresolvedType {
            ty: prop.type_name.clone(),
            context: format!("constructor argument '{}'", prop.name),
        })?;
        args.push(Argument::try_new(&prop.name, ty)?);
        body.push(format!("set{}({});", capitalize(&prop.name), prop.name));
    }

    Ok(Method::constructor(&ctx.model.name)?
        .args(args)
        .body(body.join("\n")))
}
