pub mod axis;
pub mod config;
pub mod element;
pub mod error;
pub mod gizmo;
pub mod label;

// Re-exports
pub use axis::{Axis, ParseAxisError};
pub use config::GizmoConfig;
pub use element::{CullMode, RenderTechnique, Renderable, SceneElement};
pub use error::GizmoError;
pub use gizmo::AxisGizmo;
pub use label::AxisLabel;
pub use gizmo_mesh::{Color4, Mesh};
