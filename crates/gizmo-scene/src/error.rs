use gizmo_mesh::MeshError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GizmoError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("invalid gizmo config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("label distance must be a positive finite number, got {0}")]
    InvalidLabelDistance(f32),

    #[error("label font size must be a positive finite number, got {0}")]
    InvalidFontSize(f32),
}
