//! Field declarations.

use foamj_core::Visibility;

use super::Node;
use crate::{
    Result,
    builder::{OutputJava, Outputter},
    error::require,
};

/// A field declaration with an optional initializer.
///
/// The initializer renders one indent level deeper than the declaration,
/// so multi-line initializers (builder chains, anonymous classes) read as
/// continuations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    ty: String,
    initializer: Option<Box<Node>>,
}

impl Field {
    /// Create a field; name and type are required.
    pub fn try_new(name: impl Into<String>, ty: impl Into<String>) -> Result<Self> {
        let (name, ty) = (name.into(), ty.into());
        require(&name, "field", "name")?;
        require(&ty, "field", "type")?;
        Ok(Self {
            name,
            visibility: Visibility::default(),
            is_static: false,
            is_final: false,
            ty,
            initializer: None,
        })
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn initializer(mut self, value: impl Into<Node>) -> Self {
        self.initializer = Some(Box::new(value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn get_visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn get_initializer(&self) -> Option<&Node> {
        self.initializer.as_deref()
    }
}

impl OutputJava for Field {
    fn output_java(&self, out: &mut Outputter) {
        out.indent();
        if self.visibility != Visibility::Package {
            out.out(self.visibility.as_str()).out(" ");
        }
        if self.is_static {
            out.out("static ");
        }
        if self.is_final {
            out.out("final ");
        }
        out.out(&self.ty).out(" ").out(&self.name);
        if let Some(init) = &self.initializer {
            out.increase_indent();
            out.out(" = ").out(init.as_ref());
            out.decrease_indent();
        }
        out.out(";");
    }
}
