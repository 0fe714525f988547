use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 座標軸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown axis `{0}`")]
pub struct ParseAxisError(pub String);

impl Axis {
    /// メッシュ内のセグメント順
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// セグメント番号（0, 1, 2）
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// セグメント番号から軸を取得（範囲外はNone）
    pub fn from_index(which: usize) -> Option<Self> {
        Self::ALL.get(which).copied()
    }

    /// 単位方向ベクトル
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// ラベル表示文字
    pub fn glyph(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
