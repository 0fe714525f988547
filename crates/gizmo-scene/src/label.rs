use gizmo_mesh::Color4;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// 軸ラベル
/// 矢印先端の先に表示するビルボード文字
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis: Axis,
    pub text: String,
    pub anchor: Vec3,
    pub color: Color4,
    pub font_size: f32,
    pub background: Color4,
}

impl AxisLabel {
    /// 軸から `distance` 離れた位置にラベルを作成
    pub fn new(axis: Axis, distance: f32, font_size: f32, color: Color4) -> Self {
        Self {
            axis,
            text: axis.glyph().to_string(),
            anchor: axis.unit() * distance,
            color,
            font_size,
            background: Color4::TRANSPARENT,
        }
    }

    /// 表示文字列
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// ラベルはピッキング対象外
    pub fn is_hit_testable(&self) -> bool {
        false
    }
}
