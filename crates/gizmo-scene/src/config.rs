//! Gizmo設定
//! JSONから読み込み可能

use gizmo_mesh::{ArrowParams, Color4};
use serde::{Deserialize, Serialize};

use crate::error::GizmoError;

/// [`AxisGizmo`](crate::AxisGizmo) 生成時の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoConfig {
    /// 3軸共通の矢印形状
    pub arrow: ArrowParams,
    /// 原点から各軸ラベルまでの距離
    pub label_distance: f32,
    pub label_font_size: f32,
    /// 初期の軸色（X, Y, Z の順）
    pub axis_colors: [Color4; 3],
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            arrow: ArrowParams::default(),
            label_distance: 7.0,
            label_font_size: 12.0,
            axis_colors: [Color4::RED, Color4::GREEN, Color4::BLUE],
        }
    }
}

impl GizmoConfig {
    /// JSONから設定を読み込む（省略した項目はデフォルト値）
    pub fn from_json(json: &str) -> Result<Self, GizmoError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GizmoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// ラベル設定と矢印形状を検証
    pub fn validate(&self) -> Result<(), GizmoError> {
        if !self.label_distance.is_finite() || self.label_distance <= 0.0 {
            return Err(GizmoError::InvalidLabelDistance(self.label_distance));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(GizmoError::InvalidFontSize(self.label_font_size));
        }
        self.arrow.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gizmo_mesh::MeshError;

    #[test]
    fn test_default() {
        let config = GizmoConfig::default();
        assert_eq!(config.label_distance, 7.0);
        assert_eq!(config.label_font_size, 12.0);
        assert_eq!(config.axis_colors, [Color4::RED, Color4::GREEN, Color4::BLUE]);
        assert_eq!(config.arrow, ArrowParams::default());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GizmoConfig::from_json("{}").unwrap();
        assert_eq!(config, GizmoConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "arrow": { "segments": 16 },
            "axis_colors": [[1.0, 1.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]]
        }"#;
        let config = GizmoConfig::from_json(json).unwrap();
        assert_eq!(config.arrow.segments, 16);
        assert_eq!(config.arrow.length, 5.0);
        assert_eq!(config.axis_colors[0], Color4::YELLOW);
        assert_eq!(config.label_distance, 7.0);
    }

    #[test]
    fn test_json_roundtrip_preserves_custom_values() {
        let config = GizmoConfig {
            label_distance: 9.5,
            ..GizmoConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GizmoConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GizmoConfig::from_json("{ not json"),
            Err(GizmoError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GizmoConfig { label_distance: 0.0, ..GizmoConfig::default() };
        assert!(matches!(config.validate(), Err(GizmoError::InvalidLabelDistance(_))));

        let config = GizmoConfig { label_font_size: -1.0, ..GizmoConfig::default() };
        assert!(matches!(config.validate(), Err(GizmoError::InvalidFontSize(_))));

        let json = r#"{ "arrow": { "segments": 1 } }"#;
        assert!(matches!(
            GizmoConfig::from_json(json),
            Err(GizmoError::Mesh(MeshError::TooFewSegments(1)))
        ));
    }
}
