// crates/gizmo-wasm/src/lib.rs

use wasm_bindgen::prelude::*;

use gizmo_mesh::Color4;
use gizmo_scene::{AxisGizmo, GizmoConfig, GizmoError};

mod utils;

use utils::console_log;

// パニック時のスタックトレース表示とロガー登録
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    utils::init_logging(log::LevelFilter::Info);
}

fn to_js_error(err: GizmoError) -> JsValue {
    JsValue::from_str(&format!("Failed to create coordinate system: {}", err))
}

/// CoordinateSystem構造体
/// AxisGizmoをJSから操作可能なAPIとして公開
#[wasm_bindgen]
pub struct CoordinateSystem {
    gizmo: AxisGizmo,
}

#[wasm_bindgen]
impl CoordinateSystem {
    /// デフォルト設定（赤/緑/青）で作成
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CoordinateSystem, JsValue> {
        let gizmo = AxisGizmo::new().map_err(to_js_error)?;
        console_log!("Created coordinate system ({} vertices)", gizmo.mesh().vertex_count());
        Ok(Self { gizmo })
    }

    /// JSオブジェクトの設定から作成
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config: JsValue) -> Result<CoordinateSystem, JsValue> {
        let config: GizmoConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        let gizmo = AxisGizmo::with_config(&config).map_err(to_js_error)?;
        Ok(Self { gizmo })
    }

    /// JSON文字列の設定から作成
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<CoordinateSystem, JsValue> {
        let config = GizmoConfig::from_json(json).map_err(to_js_error)?;
        let gizmo = AxisGizmo::with_config(&config).map_err(to_js_error)?;
        Ok(Self { gizmo })
    }

    /// X軸の色を設定
    #[wasm_bindgen(js_name = setAxisXColor)]
    pub fn set_axis_x_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gizmo.set_axis_x_color(Color4::new(r, g, b, a));
    }

    /// Y軸の色を設定
    #[wasm_bindgen(js_name = setAxisYColor)]
    pub fn set_axis_y_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gizmo.set_axis_y_color(Color4::new(r, g, b, a));
    }

    /// Z軸の色を設定
    #[wasm_bindgen(js_name = setAxisZColor)]
    pub fn set_axis_z_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.gizmo.set_axis_z_color(Color4::new(r, g, b, a));
    }

    /// 軸色を取得（r, g, b, aの配列）
    #[wasm_bindgen(js_name = getAxisColor)]
    pub fn get_axis_color(&self, which: usize) -> Option<Vec<f32>> {
        self.gizmo.axis_color(which).map(|c| c.to_array().to_vec())
    }

    /// 頂点位置（x, y, zの連続配列）
    pub fn positions(&self) -> Vec<f32> {
        self.gizmo
            .mesh()
            .positions
            .iter()
            .flat_map(|p| p.to_array())
            .collect()
    }

    /// 頂点色（r, g, b, aの連続配列、未設定なら空）
    pub fn colors(&self) -> Vec<f32> {
        self.gizmo
            .mesh()
            .colors()
            .map(|colors| colors.iter().flat_map(|c| c.to_array()).collect())
            .unwrap_or_default()
    }

    /// 三角形インデックス
    pub fn indices(&self) -> Vec<u32> {
        self.gizmo.mesh().indices.clone()
    }

    /// GPU転送用のインターリーブ頂点データ
    #[wasm_bindgen(js_name = vertexBytes)]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let vertices = self.gizmo.mesh().to_vertices();
        bytemuck::cast_slice(&vertices).to_vec()
    }

    /// 頂点色バッファの更新回数（変化したら再アップロード）
    #[wasm_bindgen(js_name = colorRevision)]
    pub fn color_revision(&self) -> u64 {
        self.gizmo.mesh().color_revision()
    }

    /// 軸ラベル一覧
    pub fn labels(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.gizmo.labels())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize labels: {}", e)))
    }

    /// 常にfalse
    #[wasm_bindgen(js_name = isHitTestable)]
    pub fn is_hit_testable(&self) -> bool {
        self.gizmo.is_hit_testable()
    }
}
