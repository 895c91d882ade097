//! Dirty tracking around an [`EffectPipeline`].
//!
//! The pipeline knows how to transform a mesh but never decides when. [`EffectHost`]
//! is the piece an owner keeps next to its text mesh: parameter edits and content
//! changes mark it dirty, and the owner calls [`EffectHost::rebuild_if_dirty`] once per
//! frame.
//!
//! The builder only holds fresh layout output after a content change. A parameter-only
//! rebuild re-applies the effects to the stream captured at the last content change
//! instead of reading the builder's transformed mesh back in.

use crate::material::{MaterialHandle, MaterialProvider};
use crate::params::EffectParameters;
use crate::pipeline::{EffectPipeline, RebuildOutput};
use bitflags::bitflags;
use textfx_mesh::MeshBuilder;

bitflags! {
    /// What changed since the last rebuild.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        const NONE       = 0b0000_0000;

        /// New layout output is in the builder and must be read again.
        const CONTENT    = 0b0000_0001;

        /// Effect parameters changed; the cached source must be transformed again.
        const PARAMETERS = 0b0000_0010;

        /// The outline strategy may have changed, so the bound material may too.
        const MATERIAL   = 0b0000_0100;
    }
}

impl DirtyFlags {
    #[inline]
    pub fn needs_rebuild(&self) -> bool {
        !self.is_empty()
    }

    /// Whether the builder has to be read before transforming.
    #[inline]
    pub fn needs_source(&self) -> bool {
        self.contains(Self::CONTENT)
    }

    #[inline]
    pub fn needs_material(&self) -> bool {
        self.contains(Self::MATERIAL)
    }
}

#[derive(Debug)]
pub struct EffectHost {
    pipeline: EffectPipeline,
    dirty: DirtyFlags,
    material: Option<MaterialHandle>,
}

impl EffectHost {
    /// A new host is dirty so the first frame builds the mesh.
    pub fn new(params: EffectParameters) -> Self {
        Self {
            pipeline: EffectPipeline::new(params),
            dirty: DirtyFlags::CONTENT | DirtyFlags::MATERIAL,
            material: None,
        }
    }

    pub fn parameters(&self) -> &EffectParameters {
        self.pipeline.parameters()
    }

    pub fn pipeline(&self) -> &EffectPipeline {
        &self.pipeline
    }

    /// Edit parameters in place. Marks the host dirty when anything changed and returns
    /// whether it did.
    pub fn update(&mut self, edit: impl FnOnce(&mut EffectParameters)) -> bool {
        let before = *self.pipeline.parameters();
        let mut next = before;
        edit(&mut next);
        if next == before {
            return false;
        }

        self.dirty |= DirtyFlags::PARAMETERS;
        if next.outline.enabled != before.outline.enabled
            || next.outline.strategy != before.outline.strategy
        {
            self.dirty |= DirtyFlags::MATERIAL;
        }
        self.pipeline.set_parameters(next);
        true
    }

    /// Content changed outside the host: the builder holds a new layout pass.
    pub fn set_vertices_dirty(&mut self) {
        self.dirty |= DirtyFlags::CONTENT;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.needs_rebuild()
    }

    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Material chosen by the last rebuild.
    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }

    /// Run the pipeline if anything is dirty, then clear the flags.
    ///
    /// Reads the builder only when content is dirty; otherwise the cached source is
    /// transformed again and the builder's current contents are replaced.
    pub fn rebuild_if_dirty(
        &mut self,
        builder: &mut dyn MeshBuilder,
        materials: &dyn MaterialProvider,
    ) -> Option<RebuildOutput> {
        if !self.dirty.needs_rebuild() {
            return None;
        }

        let output = if self.dirty.needs_source() {
            self.pipeline.rebuild(builder, materials)
        } else {
            self.pipeline.reapply(builder, materials)
        };
        if self.dirty.needs_material() && output.material != self.material {
            tracing::debug!(
                from = ?self.material,
                to = ?output.material,
                "text material changed"
            );
        }
        self.material = output.material;
        self.dirty = DirtyFlags::NONE;
        Some(output)
    }
}

impl Default for EffectHost {
    fn default() -> Self {
        Self::new(EffectParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::NoMaterials;
    use crate::params::OutlineStrategy;
    use glam::{Vec2, Vec3};
    use textfx_mesh::{Color32, MeshVertex, SimpleMeshBuilder};

    #[test]
    fn test_new_host_is_dirty() {
        let host = EffectHost::default();
        assert!(host.is_dirty());
        assert!(host.dirty_flags().needs_material());
    }

    #[test]
    fn test_rebuild_clears_flags() {
        let mut host = EffectHost::default();
        let mut builder = SimpleMeshBuilder::new();
        assert!(host.rebuild_if_dirty(&mut builder, &NoMaterials).is_some());
        assert!(!host.is_dirty());
        assert!(host.rebuild_if_dirty(&mut builder, &NoMaterials).is_none());
    }

    #[test]
    fn test_update_without_change_stays_clean() {
        let mut host = EffectHost::default();
        host.rebuild_if_dirty(&mut SimpleMeshBuilder::new(), &NoMaterials);
        assert!(!host.update(|p| p.spacing.spacing = 0.0));
        assert!(!host.is_dirty());
    }

    #[test]
    fn test_color_change_marks_parameters_only() {
        let mut host = EffectHost::default();
        host.rebuild_if_dirty(&mut SimpleMeshBuilder::new(), &NoMaterials);
        assert!(host.update(|p| p.outline.color = Color32::WHITE));
        assert_eq!(host.dirty_flags(), DirtyFlags::PARAMETERS);
    }

    #[test]
    fn test_strategy_change_marks_material() {
        let mut host = EffectHost::default();
        host.rebuild_if_dirty(&mut SimpleMeshBuilder::new(), &NoMaterials);
        host.update(|p| p.outline.strategy = OutlineStrategy::ChannelEncoded);
        assert_eq!(host.dirty_flags(), DirtyFlags::PARAMETERS | DirtyFlags::MATERIAL);
    }

    #[test]
    fn test_set_vertices_dirty() {
        let mut host = EffectHost::default();
        host.rebuild_if_dirty(&mut SimpleMeshBuilder::new(), &NoMaterials);
        host.set_vertices_dirty();
        assert_eq!(host.dirty_flags(), DirtyFlags::CONTENT);
    }

    #[test]
    fn test_parameter_edit_does_not_stack_effects() {
        let glyph = [(0.0, 10.0), (8.0, 10.0), (8.0, 0.0), (0.0, 0.0)]
            .map(|(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE));
        let mut builder = SimpleMeshBuilder::from_quads(&glyph);
        let mut host = EffectHost::new(EffectParameters::new().with_outline(
            1,
            Color32::BLACK,
            OutlineStrategy::Cpu,
        ));

        let first = host.rebuild_if_dirty(&mut builder, &NoMaterials);
        assert_eq!(first.map(|o| o.vertex_count), Some(20));

        host.update(|p| p.outline.color = Color32::WHITE);
        let second = host.rebuild_if_dirty(&mut builder, &NoMaterials);
        assert_eq!(second.map(|o| o.vertex_count), Some(20));
        assert_eq!(builder.vertex_count(), 20);
        assert!(builder.vertices().iter().all(|v| v.color == Color32::WHITE));
        assert_eq!(&builder.vertices()[16..], &glyph[..]);
    }

    #[test]
    fn test_content_change_reads_builder_again() {
        let glyph = |x: f32| {
            [(x, 10.0), (x + 8.0, 10.0), (x + 8.0, 0.0), (x, 0.0)]
                .map(|(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE))
        };
        let mut builder = SimpleMeshBuilder::from_quads(&glyph(0.0));
        let mut host = EffectHost::new(EffectParameters::new().with_spacing(3.0));
        host.rebuild_if_dirty(&mut builder, &NoMaterials);

        let two_glyphs = [glyph(0.0), glyph(10.0)].concat();
        builder = SimpleMeshBuilder::from_quads(&two_glyphs);
        host.set_vertices_dirty();
        let out = host.rebuild_if_dirty(&mut builder, &NoMaterials);
        assert_eq!(out.map(|o| o.vertex_count), Some(12));
        assert_eq!(builder.vertices()[6].position.x, 13.0);
    }
}
