use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGBA色（各成分 0.0〜1.0）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const BLACK: Color4 = Color4::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color4 = Color4::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color4 = Color4::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color4 = Color4::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Color4 = Color4::new(1.0, 1.0, 0.0, 1.0);
    pub const TRANSPARENT: Color4 = Color4::new(0.0, 0.0, 0.0, 0.0);

    /// 新しい色を作成
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 8bit成分から作成
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// 配列に変換
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color4 {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color4 {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color4> for [f32; 4] {
    fn from(color: Color4) -> Self {
        color.to_array()
    }
}
