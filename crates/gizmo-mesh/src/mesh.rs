use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::color::Color4;

/// GPU転送用の頂点構造体
/// 位置、法線、RGBA色を含む
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GizmoVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl GizmoVertex {
    /// 新しい頂点を作成
    pub fn new(position: Vec3, normal: Vec3, color: Color4) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }

    /// 頂点バッファレイアウトを取得
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<GizmoVertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                // position
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                // normal
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x3,
                },
                // color
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// メッシュ構造体
/// 頂点色は最初の塗りつぶしまで未設定（None）
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    colors: Option<Vec<Color4>>,
    color_revision: u64,
}

impl Mesh {
    /// 空のメッシュを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 頂点数を取得
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// インデックス数を取得
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 三角形数を取得
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 頂点色バッファ（未設定ならNone）
    pub fn colors(&self) -> Option<&[Color4]> {
        self.colors.as_deref()
    }

    /// 頂点色バッファが差し替えられた回数
    /// ホスト側はこの値の変化で再アップロードを判断する
    pub fn color_revision(&self) -> u64 {
        self.color_revision
    }

    /// 頂点色バッファを丸ごと差し替える
    pub fn set_colors(&mut self, colors: Vec<Color4>) {
        assert_eq!(
            colors.len(),
            self.positions.len(),
            "color buffer length must match vertex count"
        );
        self.colors = Some(colors);
        self.color_revision += 1;
    }

    /// 頂点追加後、既存の頂点色バッファを頂点数に合わせる（追加分は黒）
    /// 色未設定なら何もしない
    pub fn fit_colors_to_vertices(&mut self) {
        if let Some(colors) = self.colors.as_mut() {
            colors.resize(self.positions.len(), Color4::BLACK);
        }
    }

    /// GPU転送用のインターリーブ頂点列を生成
    /// 色未設定の頂点は不透明の黒
    pub fn to_vertices(&self) -> Vec<GizmoVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let normal = self.normals.get(i).copied().unwrap_or(Vec3::ZERO);
                let color = self
                    .colors
                    .as_ref()
                    .and_then(|colors| colors.get(i).copied())
                    .unwrap_or(Color4::BLACK);
                GizmoVertex::new(position, normal, color)
            })
            .collect()
    }
}
