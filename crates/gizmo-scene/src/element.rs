use gizmo_mesh::Mesh;

use crate::label::AxisLabel;

/// メッシュ描画に使うレンダーテクニック
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderTechnique {
    /// 頂点色をそのまま使う
    #[default]
    VertexColors,
    Phong,
}

/// 背面カリング設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    None,
    #[default]
    Back,
    Front,
}

/// ホストのシーングラフに渡す描画要素
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    Mesh {
        mesh: &'a Mesh,
        technique: RenderTechnique,
        cull_mode: CullMode,
        hit_testable: bool,
    },
    Label(&'a AxisLabel),
}

impl Renderable<'_> {
    /// ピッキング対象か
    pub fn is_hit_testable(&self) -> bool {
        match self {
            Renderable::Mesh { hit_testable, .. } => *hit_testable,
            Renderable::Label(label) => label.is_hit_testable(),
        }
    }
}

/// ホストのシーングラフが要素に問い合わせる機能
pub trait SceneElement {
    /// ピッキング（選択）対象か
    fn is_hit_testable(&self) -> bool;

    /// 描画要素の一覧
    fn renderables(&self) -> Vec<Renderable<'_>>;
}
