//! 座標系Gizmo
//! 3軸矢印メッシュと軸ラベルを保持し、軸色の変更に応じて再塗装する

use gizmo_mesh::{ArrowMeshBuilder, Color4, Mesh, SegmentColorPainter};

use crate::axis::Axis;
use crate::config::GizmoConfig;
use crate::element::{CullMode, RenderTechnique, Renderable, SceneElement};
use crate::error::GizmoError;
use crate::label::AxisLabel;

/// 座標系表示用Gizmo（装飾専用、ピッキング対象外）
#[derive(Debug, Clone)]
pub struct AxisGizmo {
    mesh: Mesh,
    labels: [AxisLabel; 3],
    axis_colors: [Color4; 3],
}

impl AxisGizmo {
    /// デフォルト設定（赤/緑/青）で作成
    pub fn new() -> Result<Self, GizmoError> {
        Self::with_config(&GizmoConfig::default())
    }

    /// 設定から作成
    /// メッシュ生成後、各軸のセグメントとラベルを初期色で塗る
    pub fn with_config(config: &GizmoConfig) -> Result<Self, GizmoError> {
        config.validate()?;

        let mut mesh = ArrowMeshBuilder::new(config.arrow).build()?;
        let labels = Axis::ALL.map(|axis| {
            AxisLabel::new(
                axis,
                config.label_distance,
                config.label_font_size,
                config.axis_colors[axis.index()],
            )
        });

        for axis in Axis::ALL {
            SegmentColorPainter::paint(&mut mesh, axis.index(), config.axis_colors[axis.index()]);
        }

        log::debug!("Created axis gizmo with colors {:?}", config.axis_colors);

        Ok(Self {
            mesh,
            labels,
            axis_colors: config.axis_colors,
        })
    }

    /// 軸色を変更し、その軸のセグメントとラベルだけを更新
    /// 範囲外の軸番号は無視する
    pub fn set_axis_color(&mut self, which: usize, color: Color4) {
        let Some(axis) = Axis::from_index(which) else {
            log::trace!("Ignoring color change for axis index {which}");
            return;
        };

        self.axis_colors[which] = color;
        SegmentColorPainter::paint(&mut self.mesh, which, color);
        self.labels[which].color = color;

        log::debug!("Axis {axis} color set to {color:?}");
    }

    pub fn set_axis_x_color(&mut self, color: Color4) {
        self.set_axis_color(Axis::X.index(), color);
    }

    pub fn set_axis_y_color(&mut self, color: Color4) {
        self.set_axis_color(Axis::Y.index(), color);
    }

    pub fn set_axis_z_color(&mut self, color: Color4) {
        self.set_axis_color(Axis::Z.index(), color);
    }

    /// 現在の軸色
    pub fn axis_color(&self, which: usize) -> Option<Color4> {
        self.axis_colors.get(which).copied()
    }

    pub fn axis_colors(&self) -> &[Color4; 3] {
        &self.axis_colors
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn labels(&self) -> &[AxisLabel; 3] {
        &self.labels
    }

    pub fn label(&self, which: usize) -> Option<&AxisLabel> {
        self.labels.get(which)
    }

    /// 常にfalse（ピッキングを横取りしない）
    pub fn is_hit_testable(&self) -> bool {
        false
    }
}

impl SceneElement for AxisGizmo {
    fn is_hit_testable(&self) -> bool {
        AxisGizmo::is_hit_testable(self)
    }

    fn renderables(&self) -> Vec<Renderable<'_>> {
        let mut renderables = Vec::with_capacity(1 + self.labels.len());
        renderables.push(Renderable::Mesh {
            mesh: &self.mesh,
            technique: RenderTechnique::VertexColors,
            cull_mode: CullMode::Back,
            hit_testable: false,
        });
        renderables.extend(self.labels.iter().map(Renderable::Label));
        renderables
    }
}
