//! Material provider with a fixed table.

use parking_lot::Mutex;
use textfx_effects::{EffectError, EffectResult, MaterialHandle, MaterialKind, MaterialProvider};

/// Answers material lookups from a fixed table and records every request.
#[derive(Debug, Default)]
pub struct StaticMaterialProvider {
    table: Vec<(MaterialKind, MaterialHandle)>,
    requests: Mutex<Vec<MaterialKind>>,
}

impl StaticMaterialProvider {
    /// No materials; every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text material `1` and channel outline material `2`.
    pub fn complete() -> Self {
        Self::empty()
            .with(MaterialKind::Text, MaterialHandle::new(1))
            .with(MaterialKind::ChannelOutline, MaterialHandle::new(2))
    }

    pub fn with(mut self, kind: MaterialKind, handle: MaterialHandle) -> Self {
        self.table.push((kind, handle));
        self
    }

    pub fn requests(&self) -> Vec<MaterialKind> {
        self.requests.lock().clone()
    }
}

impl MaterialProvider for StaticMaterialProvider {
    fn resolve_material(&self, kind: MaterialKind) -> EffectResult<MaterialHandle> {
        self.requests.lock().push(kind);
        self.table
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, handle)| *handle)
            .ok_or(EffectError::MaterialUnavailable(kind))
    }
}
