use crate::material::MaterialKind;

/// Errors that can cross the effect pipeline's collaborator seams.
///
/// No stage produces an error: degenerate input is handled locally (see the stage
/// modules). Only the injected material provider can fail, and the pipeline recovers
/// from that by falling back to an effect strategy that needs no special material.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectError {
    /// The provider has no material of the requested kind.
    MaterialUnavailable(MaterialKind),

    /// The provider failed while resolving a material.
    MaterialProvider(String),
}

impl std::fmt::Display for EffectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectError::MaterialUnavailable(kind) => {
                write!(f, "No material available for {:?}", kind)
            }
            EffectError::MaterialProvider(msg) => write!(f, "Material provider failed: {}", msg),
        }
    }
}

impl std::error::Error for EffectError {}

/// Result type for effect operations.
pub type EffectResult<T> = Result<T, EffectError>;
