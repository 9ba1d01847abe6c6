//! Hand-written methods declared in the model.

use super::{BuildContext, Extension};
use crate::{
    Result,
    ast::{Argument, Method},
};

/// Appends each model method with its declared signature and body.
pub struct MethodExtension;

impl Extension for MethodExtension {
    fn name(&self) -> &'static str {
        "methods"
    }

    fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
        for model in &ctx.model.methods {
            let args = model
                .args
                .iter()
                .map(|a| Argument::try_new(&a.name, &a.ty))
                .collect::<Result<Vec<_>>>()?;

            let mut method = Method::try_new(&model.name, model.return_type())?
                .visibility(model.visibility)
                .args(args)
                .body(model.body.as_str());
            if model.is_static {
                method = method.static_();
            }
            ctx.class.method(method);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use foamj_model::ClassModel;

    use super::*;
    use crate::{ast::Class, builder::OutputJava};

    #[test]
    fn test_model_methods() {
        let model: ClassModel = toml::from_str(
            r#"
            name = "Person"

            [[methods]]
            name = "describe"
            type = "String"
            args = [{ name = "prefix", type = "String" }]
            body = "return prefix + getFirstName();"

            [[methods]]
            name = "reset"
            visibility = "protected"
            static = true
            "#,
        )
        .unwrap();

        let mut ctx = BuildContext::new(&model, Class::try_new("Person").unwrap());
        MethodExtension.build_java_class(&mut ctx).unwrap();

        let methods = ctx.class.methods();
        assert_eq!(
            methods[0].to_java(),
            "public String describe(String prefix) {\n  return prefix + getFirstName();\n}"
        );
        assert_eq!(methods[1].to_java(), "protected static void reset() {\n}");
    }

    #[test]
    fn test_blank_argument_type_fails() {
        let model: ClassModel = toml::from_str(
            r#"
            name = "Person"

            [[methods]]
            name = "greet"
            args = [{ name = "who", type = "" }]
            "#,
        )
        .unwrap();

        let mut ctx = BuildContext::new(&model, Class::try_new("Person").unwrap());
        assert!(MethodExtension.build_java_class(&mut ctx).is_err());
    }
}
