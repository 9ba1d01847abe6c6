//! Method arguments.

use crate::{
    Result,
    builder::{OutputJava, Outputter},
    error::require,
};

/// A formal parameter, rendered as `<type> <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    ty: String,
}

impl Argument {
    /// Create an argument; both name and type are required.
    pub fn try_new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self> {
        let (name, ty) = (name.into(), ty.into());
        require(&name, "argument", "name")?;
        require(&ty, "argument", "type")?;
        Ok(Self { name, ty })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }
}

impl OutputJava for Argument {
    fn output_java(&self, out: &mut Outputter) {
        out.out(&self.ty).out(" ").out(&self.name);
    }
}
