//! Property-level hook.

use foamj_core::{Visibility, capitalize, constantize};
use foamj_model::PropertyModel;
use tracing::debug;

use super::{BuildContext, Extension};
use crate::{
    Error, Result,
    ast::{Argument, Class, ClassInfo, Field, Method, PropertyInfo, PropertyInfoSpec},
    error::require,
};

const PROPERTY_INFO_TYPE: &str = "foam.core.PropertyInfo";

/// Adds every model property to the class, in declaration order.
pub struct PropertyExtension;

impl Extension for PropertyExtension {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
        for prop in &ctx.model.properties {
            build_property(prop, &mut ctx.class, &mut ctx.registry)?;
        }
        Ok(())
    }
}

/// Generate the members for one property and register it.
///
/// For a property `age` of type `int` on class `Person` this adds:
/// - `private int age_;`
/// - `public int getAge()` returning `age_`
/// - `public Person setAge(int val)`, assigning `age_` and returning `this`
/// - `public static final foam.core.PropertyInfo AGE`, initialized with the
///   property's accessor class
///
/// and registers `Person.AGE` in `registry`. Registering the same property
/// twice is not detected here.
pub fn build_property(
    prop: &PropertyModel,
    class: &mut Class,
    registry: &mut ClassInfo,
) -> Result<()> {
    require(&prop.name, "property", "name")?;
    let unresolved = || Error::UnresolvedType {
        ty: prop.type_name.clone(),
        context: format!("property '{}'", prop.name),
    };
    let java_type = prop.java_type().ok_or_else(unresolved)?;
    let info_type = prop.java_info_type().ok_or_else(unresolved)?;
    let json_parser = prop.java_json_parser().ok_or_else(unresolved)?;

    let private_name = format!("{}_", prop.name);
    let capitalized = capitalize(&prop.name);
    let constant = constantize(&prop.name);
    let owner = class.name().to_string();
    debug!(property = %prop.name, %java_type, "adding property");

    class
        .field(Field::try_new(&private_name, &java_type)?.visibility(Visibility::Private))
        .method(
            Method::try_new(format!("get{}", capitalized), &java_type)?
                .body(format!("return {};", private_name)),
        )
        .method(
            Method::try_new(format!("set{}", capitalized), &owner)?
                .arg(Argument::try_new("val", &java_type)?)
                .body(format!("{} = val;\nreturn this;", private_name)),
        );

    let info = PropertyInfo::try_new(PropertyInfoSpec {
        owner: &owner,
        name: &prop.name,
        java_type: &java_type,
        info_type: &info_type,
        json_parser: &json_parser,
    })?;
    class.field(
        Field::try_new(&constant, PROPERTY_INFO_TYPE)?
            .static_()
            .final_()
            .initializer(info),
    );

    registry.add_property(format!("{}.{}", owner, constant));
    Ok(())
}
