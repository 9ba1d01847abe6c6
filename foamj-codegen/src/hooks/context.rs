//! State threaded through one class build.

use foamj_model::ClassModel;

use crate::ast::{Class, ClassInfo};

/// The class under construction and its property registry.
///
/// Created by [`ClassHook`](super::ClassHook) for a single model and
/// consumed when the pass finishes; nothing outlives one build.
#[derive(Debug)]
pub struct BuildContext<'m> {
    /// The model being translated.
    pub model: &'m ClassModel,
    /// The class node extensions add members to.
    pub class: Class,
    /// Property registry; becomes the `classInfo_` initializer.
    pub registry: ClassInfo,
}

impl<'m> BuildContext<'m> {
    pub fn new(model: &'m ClassModel, class: Class) -> Self {
        Self {
            model,
            class,
            registry: ClassInfo::new(),
        }
    }
}
