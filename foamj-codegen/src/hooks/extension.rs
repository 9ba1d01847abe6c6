//! Extension trait for class builds.

use super::BuildContext;
use crate::Result;

/// A unit that contributes members to a generated class.
///
/// Extensions run in registration order after the class-level hook has
/// set up the class and its registry. Each may add fields and methods and
/// register properties.
///
/// # Example
///
/// ```ignore
/// struct ToStringExtension;
///
/// impl Extension for ToStringExtension {
///     fn name(&self) -> &'static str { "to-string" }
///
///     fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()> {
///         ctx.class.method(
///             Method::try_new("toString", "String")?
///                 .body(format!("return \"{}\";", ctx.model.name)),
///         );
///         Ok(())
///     }
/// }
/// ```
pub trait Extension: Send + Sync {
    /// The name of this extension (for logging).
    fn name(&self) -> &'static str;

    /// Add this extension's members to the class under construction.
    ///
    /// # Errors
    ///
    /// Returns an error if a node cannot be built from the model.
    fn build_java_class(&self, ctx: &mut BuildContext<'_>) -> Result<()>;
}
