pub mod arrow;
pub mod color;
pub mod error;
pub mod mesh;
pub mod paint;

pub use arrow::{ArrowMeshBuilder, ArrowParams, AXIS_DIRECTIONS};
pub use color::Color4;
pub use error::MeshError;
pub use mesh::{GizmoVertex, Mesh};
pub use paint::{paint_segment, segment_range, SegmentColorPainter, SEGMENT_COUNT};

// Re-export glam types for consistent version usage
pub use glam;
