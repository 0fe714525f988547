//! 軸セグメント単位の頂点色塗装
//! 軸メッシュは軸ごとに等しい長さの連続した頂点セグメント3つに分かれる
//! 1つのセグメントを塗っても他のセグメントは変わらない

use std::ops::Range;

use crate::color::Color4;
use crate::mesh::Mesh;

/// 軸メッシュのセグメント数
pub const SEGMENT_COUNT: usize = 3;

/// セグメント `which` の頂点範囲（軸番号でなければNone）
/// 頂点数が3の倍数でなければpanic
pub fn segment_range(vertex_count: usize, which: usize) -> Option<Range<usize>> {
    assert!(
        vertex_count % SEGMENT_COUNT == 0,
        "vertex count {vertex_count} is not divisible into {SEGMENT_COUNT} segments"
    );
    if which >= SEGMENT_COUNT {
        return None;
    }
    let size = vertex_count / SEGMENT_COUNT;
    Some(size * which..size * (which + 1))
}

/// 軸メッシュの1セグメントを単色で塗る
pub struct SegmentColorPainter;

impl SegmentColorPainter {
    /// セグメント `which` の頂点色をすべて `color` にする
    ///
    /// 色未設定の頂点は不透明の黒から始まる。頂点色バッファは作り直して
    /// 丸ごと差し替えるので、メッシュの色リビジョンが進む。
    /// 範囲外の `which` ではメッシュに触れない。
    pub fn paint(mesh: &mut Mesh, which: usize, color: Color4) {
        let Some(range) = segment_range(mesh.vertex_count(), which) else {
            log::trace!("Ignoring paint for axis index {which}");
            return;
        };

        // 頂点数と長さが合わないバッファは黒で補う（余りは切り捨て）
        let mut colors = mesh.colors().map(<[Color4]>::to_vec).unwrap_or_default();
        colors.resize(mesh.vertex_count(), Color4::BLACK);
        colors[range.clone()].fill(color);

        log::debug!("Painted axis segment {which} ({range:?}) with {color:?}");
        mesh.set_colors(colors);
    }
}

/// [`SegmentColorPainter::paint`] の短縮形
pub fn paint_segment(mesh: &mut Mesh, which: usize, color: Color4) {
    SegmentColorPainter::paint(mesh, which, color);
}
