use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("The arrow dimension `{name}` must be a positive finite number, got {value}.")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("The arrow head ({head_length}) must be shorter than the arrow ({length}).")]
    HeadTooLong { head_length: f32, length: f32 },

    #[error("An arrow needs at least 3 radial segments, got {0}.")]
    TooFewSegments(u32),

    #[error("The arrow direction has zero length.")]
    ZeroDirection,

    #[error("Arrow segment has {found} vertices, expected {expected}.")]
    UnequalSegments { expected: usize, found: usize },
}
