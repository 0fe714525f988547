//! 座標軸矢印メッシュ生成
//! 原点から +X, +Y, +Z に伸びる3本の矢印を1つのメッシュにまとめる

use std::ops::Range;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;

/// 矢印の並び順（メッシュ内のセグメント順）
pub const AXIS_DIRECTIONS: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// 矢印断面プロファイルの点数
pub const PROFILE_POINTS: usize = 5;

/// 矢印形状パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowParams {
    /// 原点から先端までの長さ
    pub length: f32,
    /// 軸部の直径
    pub shaft_diameter: f32,
    /// 矢じり根元の直径
    pub head_diameter: f32,
    /// 矢じりの長さ
    pub head_length: f32,
    /// 周方向の分割数
    pub segments: u32,
}

impl Default for ArrowParams {
    fn default() -> Self {
        Self {
            length: 5.0,
            shaft_diameter: 0.5,
            head_diameter: 1.2,
            // 軸径の3倍
            head_length: 1.5,
            segments: 10,
        }
    }
}

impl ArrowParams {
    /// パラメータの妥当性を検証
    pub fn validate(&self) -> Result<(), MeshError> {
        let dimensions = [
            ("length", self.length),
            ("shaft_diameter", self.shaft_diameter),
            ("head_diameter", self.head_diameter),
            ("head_length", self.head_length),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::InvalidDimension { name, value });
            }
        }
        if self.head_length >= self.length {
            return Err(MeshError::HeadTooLong {
                head_length: self.head_length,
                length: self.length,
            });
        }
        if self.segments < 3 {
            return Err(MeshError::TooFewSegments(self.segments));
        }
        Ok(())
    }

    /// 1本の矢印の頂点数
    pub fn vertices_per_arrow(&self) -> usize {
        PROFILE_POINTS * self.segments as usize
    }
}

/// 矢印の断面プロファイル（x: 軸方向, y: 半径）
pub fn arrow_profile(params: &ArrowParams) -> [Vec2; PROFILE_POINTS] {
    let shaft_radius = params.shaft_diameter * 0.5;
    let head_radius = params.head_diameter * 0.5;
    let head_start = params.length - params.head_length;

    [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, shaft_radius),
        Vec2::new(head_start, shaft_radius),
        Vec2::new(head_start, head_radius),
        Vec2::new(params.length, 0.0),
    ]
}

/// プロファイル各点の法線（x: 軸方向, y: 半径方向）
/// 隣接する辺の外向き法線の平均
fn profile_normals(profile: &[Vec2]) -> Vec<Vec2> {
    let edge_normals: Vec<Vec2> = profile
        .windows(2)
        .map(|edge| {
            let d = edge[1] - edge[0];
            Vec2::new(-d.y, d.x).normalize_or_zero()
        })
        .collect();

    (0..profile.len())
        .map(|i| {
            let before = i.checked_sub(1).and_then(|k| edge_normals.get(k));
            let after = edge_normals.get(i);
            let sum = before.copied().unwrap_or(Vec2::ZERO) + after.copied().unwrap_or(Vec2::ZERO);
            sum.normalize_or_zero()
        })
        .collect()
}

/// プロファイルを方向軸周りに回転させた回転体をメッシュに追加
/// 追加した頂点範囲を返す
pub fn append_revolved(
    mesh: &mut Mesh,
    profile: &[Vec2],
    direction: Vec3,
    segments: u32,
) -> Result<Range<usize>, MeshError> {
    if segments < 3 {
        return Err(MeshError::TooFewSegments(segments));
    }
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Err(MeshError::ZeroDirection);
    }

    let up = dir.any_orthogonal_vector().normalize();
    let right = dir.cross(up).normalize();

    let segments = segments as usize;
    let start = mesh.positions.len();
    let normals = profile_normals(profile);

    // 頂点: プロファイル1点につき1リング
    for (point, normal) in profile.iter().zip(&normals) {
        for j in 0..segments {
            let angle = (j as f32 / segments as f32) * std::f32::consts::TAU;
            let radial = up * angle.cos() + right * angle.sin();

            mesh.positions.push(dir * point.x + radial * point.y);
            mesh.normals.push(dir * normal.x + radial * normal.y);
        }
    }

    // 隣接リング間を四角形（2三角形）で接続
    // 半径0のリング側に潰れる三角形は省く
    for i in 0..profile.len().saturating_sub(1) {
        let ring = (start + i * segments) as u32;
        let next_ring = ring + segments as u32;
        let collapsed = profile[i].y.abs() <= f32::EPSILON;
        let next_collapsed = profile[i + 1].y.abs() <= f32::EPSILON;

        for j in 0..segments {
            let j1 = (j + 1) % segments;
            let a = ring + j as u32;
            let b = ring + j1 as u32;
            let c = next_ring + j1 as u32;
            let d = next_ring + j as u32;

            if !collapsed {
                mesh.indices.extend_from_slice(&[a, b, c]);
            }
            if !next_collapsed {
                mesh.indices.extend_from_slice(&[a, c, d]);
            }
        }
    }

    mesh.fit_colors_to_vertices();

    Ok(start..mesh.positions.len())
}

/// 3軸矢印メッシュのビルダー
#[derive(Debug, Clone, Default)]
pub struct ArrowMeshBuilder {
    params: ArrowParams,
}

impl ArrowMeshBuilder {
    pub fn new(params: ArrowParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ArrowParams {
        &self.params
    }

    /// +X, +Y, +Z の順に矢印を並べたメッシュを生成
    /// 頂点列は軸ごとに等しい長さの連続ブロックになる
    pub fn build(&self) -> Result<Mesh, MeshError> {
        self.params.validate()?;

        let profile = arrow_profile(&self.params);
        let expected = self.params.vertices_per_arrow();
        let mut mesh = Mesh::new();

        for direction in AXIS_DIRECTIONS {
            let range = append_revolved(&mut mesh, &profile, direction, self.params.segments)?;
            if range.len() != expected {
                return Err(MeshError::UnequalSegments {
                    expected,
                    found: range.len(),
                });
            }
        }

        log::debug!(
            "Built axis arrow mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color4;

    #[test]
    fn test_default_vertex_count() {
        let mesh = ArrowMeshBuilder::default().build().unwrap();
        // 3 arrows * 5 rings * 10 segments
        assert_eq!(mesh.vertex_count(), 150);
        assert_eq!(mesh.vertex_count() % 3, 0);
        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        assert!(mesh.colors().is_none());
    }

    #[test]
    fn test_default_triangle_count() {
        let mesh = ArrowMeshBuilder::default().build().unwrap();
        // per arrow: cap 10 + shaft 20 + head back 20 + cone 10
        assert_eq!(mesh.triangle_count(), 180);
        assert_eq!(mesh.index_count() % 3, 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_vertex_count_divisible_for_other_tessellations() {
        for segments in [3, 7, 16, 32] {
            let params = ArrowParams { segments, ..ArrowParams::default() };
            let mesh = ArrowMeshBuilder::new(params).build().unwrap();
            assert_eq!(mesh.vertex_count(), 3 * params.vertices_per_arrow());
        }
    }

    #[test]
    fn test_blocks_follow_axis_order() {
        let params = ArrowParams::default();
        let mesh = ArrowMeshBuilder::new(params).build().unwrap();
        let block = mesh.vertex_count() / 3;
        let head_radius = params.head_diameter * 0.5 + 1e-4;

        for (k, axis) in AXIS_DIRECTIONS.iter().enumerate() {
            let positions = &mesh.positions[block * k..block * (k + 1)];

            let tip = positions.iter().map(|p| p.dot(*axis)).fold(f32::MIN, f32::max);
            assert!((tip - params.length).abs() < 1e-4);

            for p in positions {
                assert!(p.dot(*axis) >= -1e-4);
                let off_axis = (*p - *axis * p.dot(*axis)).length();
                assert!(off_axis <= head_radius);
            }
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = ArrowMeshBuilder::default().build().unwrap();
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_profile_shape() {
        let profile = arrow_profile(&ArrowParams::default());
        assert_eq!(profile[0], Vec2::ZERO);
        assert_eq!(profile[1], Vec2::new(0.0, 0.25));
        assert_eq!(profile[2], Vec2::new(3.5, 0.25));
        assert_eq!(profile[3], Vec2::new(3.5, 0.6));
        assert_eq!(profile[4], Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let params = ArrowParams { shaft_diameter: 0.0, ..ArrowParams::default() };
        assert_eq!(
            ArrowMeshBuilder::new(params).build().unwrap_err(),
            MeshError::InvalidDimension { name: "shaft_diameter", value: 0.0 }
        );

        let params = ArrowParams { length: -5.0, ..ArrowParams::default() };
        assert!(matches!(
            ArrowMeshBuilder::new(params).build(),
            Err(MeshError::InvalidDimension { name: "length", .. })
        ));

        let params = ArrowParams { head_diameter: f32::NAN, ..ArrowParams::default() };
        assert!(ArrowMeshBuilder::new(params).build().is_err());
    }

    #[test]
    fn test_rejects_head_longer_than_arrow() {
        let params = ArrowParams { head_length: 5.0, ..ArrowParams::default() };
        assert!(matches!(
            ArrowMeshBuilder::new(params).build(),
            Err(MeshError::HeadTooLong { .. })
        ));
    }

    #[test]
    fn test_rejects_too_few_segments() {
        let params = ArrowParams { segments: 2, ..ArrowParams::default() };
        assert_eq!(
            ArrowMeshBuilder::new(params).build().unwrap_err(),
            MeshError::TooFewSegments(2)
        );
    }

    #[test]
    fn test_append_revolved_zero_direction() {
        let mut mesh = Mesh::new();
        let profile = arrow_profile(&ArrowParams::default());
        let result = append_revolved(&mut mesh, &profile, Vec3::ZERO, 10);
        assert_eq!(result, Err(MeshError::ZeroDirection));
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_append_to_painted_mesh_keeps_colors_in_step() {
        let mut mesh = ArrowMeshBuilder::default().build().unwrap();
        crate::paint::paint_segment(&mut mesh, 0, Color4::RED);

        let profile = arrow_profile(&ArrowParams::default());
        for direction in AXIS_DIRECTIONS {
            append_revolved(&mut mesh, &profile, direction, 10).unwrap();
        }
        assert_eq!(mesh.vertex_count(), 300);
        assert_eq!(mesh.colors().unwrap().len(), 300);
        assert!(mesh.colors().unwrap()[150..].iter().all(|&c| c == Color4::BLACK));

        crate::paint::paint_segment(&mut mesh, 2, Color4::BLUE);
        let colors = mesh.colors().unwrap();
        assert!(colors[..50].iter().all(|&c| c == Color4::RED));
        assert!(colors[200..].iter().all(|&c| c == Color4::BLUE));
    }

    #[test]
    fn test_append_revolved_returns_range() {
        let mut mesh = Mesh::new();
        let profile = arrow_profile(&ArrowParams::default());
        let first = append_revolved(&mut mesh, &profile, Vec3::X, 8).unwrap();
        let second = append_revolved(&mut mesh, &profile, Vec3::new(1.0, 1.0, 0.0), 8).unwrap();
        assert_eq!(first, 0..40);
        assert_eq!(second, 40..80);
    }
}
