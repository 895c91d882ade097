//! The single entry point that runs every enabled effect over a text mesh.

use crate::material::{MaterialHandle, MaterialKind, MaterialProvider};
use crate::params::{EffectParameters, OutlineStrategy};
use crate::stages::Stage;
use textfx_core::profiling::{profile_function, profile_scope};
use textfx_mesh::{MeshBuilder, MeshVertex, Topology, VertexStream};

/// Buffers reused from one rebuild to the next.
///
/// Everything here is cleared at the start of a rebuild. Only capacity carries over.
#[derive(Debug, Default)]
pub struct ScratchPool {
    stream: VertexStream,
    spare: Vec<MeshVertex>,
}

impl ScratchPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.stream.reset(Topology::default());
        self.spare.clear();
    }
}

/// What a rebuild produced, for the owner of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildOutput {
    /// Material the mesh should be drawn with, if the provider had one.
    pub material: Option<MaterialHandle>,
    pub vertex_count: usize,
    pub index_count: usize,
    pub topology: Topology,
    /// Outline strategy that actually ran, after any fallback.
    pub outline_strategy: Option<OutlineStrategy>,
}

/// Runs the enabled stages in a fixed order:
/// spacing, circular warp, gradient, vertex color, outline, shadow.
///
/// Geometry passes run first so every color stage sees final positions. The outline runs
/// after coloring so its copies keep the pure outline color, and the shadow runs last so
/// it copies the outlined text.
///
/// The untransformed stream read from the builder is kept as the pipeline's source, so
/// a parameter change can be re-applied with [`EffectPipeline::reapply`] without reading
/// the builder's already transformed contents back in.
#[derive(Debug, Default)]
pub struct EffectPipeline {
    params: EffectParameters,
    stages: Vec<Stage>,
    source: Vec<MeshVertex>,
    scratch: ScratchPool,
}

impl EffectPipeline {
    pub fn new(params: EffectParameters) -> Self {
        Self {
            params,
            stages: Vec::new(),
            source: Vec::new(),
            scratch: ScratchPool::new(),
        }
    }

    /// Replace the parameters. Takes effect on the next rebuild.
    pub fn set_parameters(&mut self, params: EffectParameters) {
        self.params = params;
    }

    pub fn parameters(&self) -> &EffectParameters {
        &self.params
    }

    /// Stages run by the most recent rebuild.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Untransformed stream captured by the last [`EffectPipeline::rebuild`].
    pub fn source(&self) -> &[MeshVertex] {
        &self.source
    }

    /// Read fresh layout output from `builder`, transform it and write it back.
    ///
    /// Call this when the builder holds a new layout pass. The stream read here becomes
    /// the source for later [`EffectPipeline::reapply`] calls.
    pub fn rebuild(
        &mut self,
        builder: &mut dyn MeshBuilder,
        materials: &dyn MaterialProvider,
    ) -> RebuildOutput {
        profile_function!();
        {
            profile_scope!("read_source");
            self.source.clear();
            builder.vertex_stream(&mut self.source);
        }
        self.reapply(builder, materials)
    }

    /// Transform the source captured by the last rebuild again and write it to `builder`.
    ///
    /// For parameter-only changes, where the builder still holds this pipeline's own
    /// output. Before any rebuild the source is empty and so is the result.
    pub fn reapply(
        &mut self,
        builder: &mut dyn MeshBuilder,
        materials: &dyn MaterialProvider,
    ) -> RebuildOutput {
        profile_function!();
        let params = self.params.sanitized();
        let (outline_strategy, material) = resolve_outline(&params, materials);
        let topology = match outline_strategy {
            Some(OutlineStrategy::Cpu) => Topology::Quads,
            _ => Topology::Triangles,
        };

        self.stages.clear();
        build_stages(&params, outline_strategy, &mut self.stages);

        let scratch = &mut self.scratch;
        scratch.clear();
        scratch.stream.load_triangle_stream(&self.source, topology);

        for stage in &self.stages {
            stage.apply(&mut scratch.stream, &mut scratch.spare);
            tracing::trace!(
                stage = stage.name(),
                vertices = scratch.stream.len(),
                "stage applied"
            );
        }

        {
            profile_scope!("commit");
            scratch.stream.commit(builder);
        }

        let output = RebuildOutput {
            material,
            vertex_count: scratch.stream.len(),
            index_count: scratch.stream.indices().len(),
            topology: scratch.stream.topology(),
            outline_strategy,
        };
        tracing::trace!(
            vertices = output.vertex_count,
            indices = output.index_count,
            stages = self.stages.len(),
            "text mesh rebuilt"
        );
        output
    }
}

/// Pick the outline strategy that can actually run and the material to draw with.
///
/// Channel-encoded outlines need a shader that understands the packed channels. When the
/// provider cannot supply one, the rebuild falls back to CPU duplication.
fn resolve_outline(
    params: &EffectParameters,
    materials: &dyn MaterialProvider,
) -> (Option<OutlineStrategy>, Option<MaterialHandle>) {
    if !params.outline.enabled {
        return (None, text_material(materials));
    }
    match params.outline.strategy {
        OutlineStrategy::Cpu => (Some(OutlineStrategy::Cpu), text_material(materials)),
        OutlineStrategy::ChannelEncoded => {
            match materials.resolve_material(MaterialKind::ChannelOutline) {
                Ok(handle) => (Some(OutlineStrategy::ChannelEncoded), Some(handle)),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "channel-encoded outline unavailable, falling back to CPU outline"
                    );
                    (Some(OutlineStrategy::Cpu), text_material(materials))
                }
            }
        }
    }
}

fn text_material(materials: &dyn MaterialProvider) -> Option<MaterialHandle> {
    match materials.resolve_material(MaterialKind::Text) {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::debug!(error = %err, "no text material, keeping the mesh's current one");
            None
        }
    }
}

fn build_stages(
    params: &EffectParameters,
    outline_strategy: Option<OutlineStrategy>,
    stages: &mut Vec<Stage>,
) {
    if params.spacing.enabled {
        stages.push(Stage::Spacing(params.spacing));
    }
    if params.circular.enabled {
        stages.push(Stage::CircularWarp(params.circular));
    }
    if params.gradient.is_active() {
        stages.push(Stage::Gradient(params.gradient));
    }
    if params.vertex_color.enabled {
        stages.push(Stage::VertexColor(params.vertex_color));
    }
    if let Some(strategy) = outline_strategy {
        stages.push(Stage::Outline(params.outline.with_strategy(strategy)));
    }
    if params.shadow.enabled {
        stages.push(Stage::Shadow(params.shadow));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EffectError, EffectResult};
    use crate::material::NoMaterials;
    use crate::params::GradientParams;
    use glam::{Vec2, Vec3};
    use textfx_mesh::{Color32, SimpleMeshBuilder};

    struct OutlineOnly;

    impl MaterialProvider for OutlineOnly {
        fn resolve_material(&self, kind: MaterialKind) -> EffectResult<MaterialHandle> {
            match kind {
                MaterialKind::ChannelOutline => Ok(MaterialHandle::new(7)),
                MaterialKind::Text => Err(EffectError::MaterialUnavailable(kind)),
            }
        }
    }

    fn glyphs(count: usize) -> SimpleMeshBuilder {
        let quads: Vec<MeshVertex> = (0..count)
            .flat_map(|i| {
                let x = i as f32 * 10.0;
                [(x, 10.0), (x + 8.0, 10.0), (x + 8.0, 0.0), (x, 0.0)]
                    .map(|(x, y)| MeshVertex::new(Vec3::new(x, y, 0.0), Vec2::ZERO, Color32::WHITE))
            })
            .collect();
        SimpleMeshBuilder::from_quads(&quads)
    }

    #[test]
    fn test_no_effects_keeps_mesh() {
        let mut builder = glyphs(2);
        let before = builder.vertices().to_vec();
        let mut pipeline = EffectPipeline::default();
        let out = pipeline.rebuild(&mut builder, &NoMaterials);

        assert!(pipeline.stages().is_empty());
        assert_eq!(out.topology, Topology::Triangles);
        assert_eq!(out.vertex_count, 12);
        assert_eq!(out.material, None);
        assert_eq!(out.outline_strategy, None);
        let mut flattened = Vec::new();
        SimpleMeshBuilder::from_quads(&before).vertex_stream(&mut flattened);
        assert_eq!(builder.vertices(), &flattened[..]);
    }

    #[test]
    fn test_stage_order() {
        let params = EffectParameters::new()
            .with_shadow(Vec2::new(1.0, -1.0), Color32::BLACK)
            .with_outline(1, Color32::BLACK, OutlineStrategy::Cpu)
            .with_gradient(GradientParams::two_color(Color32::WHITE, Color32::BLACK))
            .with_spacing(1.0);
        let mut pipeline = EffectPipeline::new(params);
        pipeline.rebuild(&mut glyphs(1), &NoMaterials);

        let names: Vec<&str> = pipeline.stages().iter().map(Stage::name).collect();
        assert_eq!(names, ["spacing", "gradient", "outline_cpu", "shadow"]);
    }

    #[test]
    fn test_cpu_outline_uses_quads() {
        let params = EffectParameters::new().with_outline(1, Color32::BLACK, OutlineStrategy::Cpu);
        let mut pipeline = EffectPipeline::new(params);
        let out = pipeline.rebuild(&mut glyphs(3), &NoMaterials);
        assert_eq!(out.topology, Topology::Quads);
        assert_eq!(out.vertex_count, 60);
        assert_eq!(out.index_count, 90);
    }

    #[test]
    fn test_channel_outline_resolves_material() {
        let params = EffectParameters::new().with_outline(
            2,
            Color32::BLACK,
            OutlineStrategy::ChannelEncoded,
        );
        let mut pipeline = EffectPipeline::new(params);
        let out = pipeline.rebuild(&mut glyphs(2), &OutlineOnly);
        assert_eq!(out.outline_strategy, Some(OutlineStrategy::ChannelEncoded));
        assert_eq!(out.material, Some(MaterialHandle::new(7)));
        assert_eq!(out.vertex_count, 12);
    }

    #[test]
    fn test_channel_outline_falls_back() {
        let params = EffectParameters::new().with_outline(
            2,
            Color32::BLACK,
            OutlineStrategy::ChannelEncoded,
        );
        let mut pipeline = EffectPipeline::new(params);
        let out = pipeline.rebuild(&mut glyphs(2), &NoMaterials);
        assert_eq!(out.outline_strategy, Some(OutlineStrategy::Cpu));
        assert_eq!(out.topology, Topology::Quads);
        assert_eq!(out.vertex_count, 40);
        assert_eq!(pipeline.stages()[0].name(), "outline_cpu");
    }

    #[test]
    fn test_parameters_sanitized_per_rebuild() {
        let params = EffectParameters::new().with_outline(0, Color32::BLACK, OutlineStrategy::Cpu);
        let mut pipeline = EffectPipeline::new(params);
        pipeline.rebuild(&mut glyphs(1), &NoMaterials);
        assert_eq!(pipeline.parameters().outline.width, 0);
        match pipeline.stages()[0] {
            Stage::Outline(outline) => assert_eq!(outline.width, 1),
            other => panic!("unexpected stage {other:?}"),
        }
    }

    #[test]
    fn test_empty_mesh() {
        let params = EffectParameters::new()
            .with_outline(1, Color32::BLACK, OutlineStrategy::Cpu)
            .with_shadow(Vec2::ONE, Color32::BLACK);
        let mut builder = SimpleMeshBuilder::new();
        let out = EffectPipeline::new(params).rebuild(&mut builder, &NoMaterials);
        assert_eq!(out.vertex_count, 0);
        assert_eq!(builder.vertex_count(), 0);
    }

    #[test]
    fn test_reapply_uses_captured_source() {
        let params = EffectParameters::new()
            .with_spacing(2.0)
            .with_outline(1, Color32::BLACK, OutlineStrategy::Cpu);
        let mut pipeline = EffectPipeline::new(params);
        let mut builder = glyphs(2);
        let first = pipeline.rebuild(&mut builder, &NoMaterials);
        let committed = builder.vertices().to_vec();
        assert_eq!(pipeline.source().len(), 12);

        let second = pipeline.reapply(&mut builder, &NoMaterials);
        assert_eq!(first, second);
        assert_eq!(builder.vertices(), &committed[..]);

        pipeline.set_parameters(params.with_spacing(5.0));
        let third = pipeline.reapply(&mut builder, &NoMaterials);
        assert_eq!(third.vertex_count, 40);
        // Second glyph's original quad moves by 5, not by 2 + 5.
        assert_eq!(builder.vertices()[36].position.x, 10.0 + 5.0);
    }

    #[test]
    fn test_rebuild_replaces_source() {
        let mut pipeline = EffectPipeline::default();
        pipeline.rebuild(&mut glyphs(3), &NoMaterials);
        assert_eq!(pipeline.source().len(), 18);
        let mut builder = glyphs(1);
        let out = pipeline.rebuild(&mut builder, &NoMaterials);
        assert_eq!(pipeline.source().len(), 6);
        assert_eq!(out.vertex_count, 6);
    }
}
