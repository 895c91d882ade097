//! Material lookup, injected by the owner of the text mesh.

use crate::error::{EffectError, EffectResult};

/// Materials the pipeline may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Plain text material.
    Text,
    /// Material whose shader expands the channel-encoded outline at draw time.
    ChannelOutline,
}

/// Opaque reference to a material owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialHandle(u64);

impl MaterialHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Resolves materials by kind. Never constructed inside the pipeline.
pub trait MaterialProvider {
    fn resolve_material(&self, kind: MaterialKind) -> EffectResult<MaterialHandle>;
}

/// A provider with no materials at all. Every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMaterials;

impl MaterialProvider for NoMaterials {
    fn resolve_material(&self, kind: MaterialKind) -> EffectResult<MaterialHandle> {
        Err(EffectError::MaterialUnavailable(kind))
    }
}
