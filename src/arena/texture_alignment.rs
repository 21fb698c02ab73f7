//! Texture tiling/offset for the goal wall pieces.
//!
//! Left and Right always show `TEXTURE_REFERENCE_TILES` repeats across their
//! face and are never adjusted. Bottom and Top are smaller than the side
//! pieces, so they get the same texel density and a V offset chosen so the
//! texture phase matches the side pieces where they meet at `goal_min_y` and
//! `goal_max_y`.
//!
//! Bevy's `Cuboid` mesh runs V bottom to top on its `+Z` face and top to
//! bottom on its `-Z` face. A wall whose visible face is `-Z` (North) therefore
//! sees a mirrored V axis, and the edge a piece shares with its neighbour sits
//! at local `V = 0` instead of `V = 1` (or the reverse).

use bevy::math::Affine2;
use bevy::prelude::*;

use super::constants::TEXTURE_REFERENCE_TILES;
use super::dimensions::PlaneDimensions;
use super::layout::PieceGeometry;
use super::layout::WallLayout;
use super::layout::WallPieceKind;

/// Tiling (repeat count) and offset (phase) for one face's texture coordinates:
/// `uv' = uv * tiling + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TextureTransform {
    pub tiling: Vec2,
    pub offset: Vec2,
}

impl TextureTransform {
    pub const REFERENCE: Self = Self {
        tiling: Vec2::splat(TEXTURE_REFERENCE_TILES),
        offset: Vec2::ZERO,
    };

    pub fn uv_transform(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.tiling, 0.0, self.offset)
    }

    /// Fractional V texture coordinate this piece shows at world height `world_y`.
    pub fn v_phase_at(&self, piece: &PieceGeometry, world_y: f32, flipped: bool) -> f32 {
        let up = (world_y - piece.min().y) / piece.size.y;
        let local_v = if flipped { 1.0 - up } else { up };
        wrap_phase(local_v.mul_add(self.tiling.y, self.offset.y))
    }
}

/// Texels per world unit, taken from the full-height side pieces.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TextureDensity {
    pub horizontal: f32,
    pub vertical:   f32,
}

impl TextureDensity {
    /// `reference_side_width` is the side-piece width the horizontal density is measured on.
    pub fn new(reference_side_width: f32, dims: &PlaneDimensions) -> Self {
        Self {
            horizontal: TEXTURE_REFERENCE_TILES / reference_side_width,
            vertical:   TEXTURE_REFERENCE_TILES / dims.height,
        }
    }

    /// V phase of the side pieces at world height `y`
    pub fn phase_at(&self, y: f32, dims: &PlaneDimensions, flipped: bool) -> f32 {
        let distance = if flipped { dims.height - y } else { y };
        wrap_phase(distance * self.vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTextures {
    pub left:   TextureTransform,
    pub right:  TextureTransform,
    pub bottom: TextureTransform,
    pub top:    TextureTransform,
}

impl WallTextures {
    pub fn align(
        layout: &WallLayout,
        density: TextureDensity,
        dims: &PlaneDimensions,
        flipped: bool,
    ) -> Self {
        let center_tiling_u = layout.opening_width * density.horizontal;
        let bottom_tiling_v = layout.goal_min_y * density.vertical;
        let top_tiling_v = (dims.height - layout.goal_max_y) * density.vertical;

        let phase_at_goal_min_y = density.phase_at(layout.goal_min_y, dims, flipped);
        let phase_at_goal_max_y = density.phase_at(layout.goal_max_y, dims, flipped);

        // bottom piece: its top edge meets the side pieces at goal_min_y
        let bottom_offset_v = if flipped {
            phase_at_goal_min_y
        } else {
            end_edge_offset(phase_at_goal_min_y, bottom_tiling_v)
        };

        // top piece: its bottom edge meets the side pieces at goal_max_y
        let top_offset_v = if flipped {
            end_edge_offset(phase_at_goal_max_y, top_tiling_v)
        } else {
            phase_at_goal_max_y
        };

        Self {
            left:   TextureTransform::REFERENCE,
            right:  TextureTransform::REFERENCE,
            bottom: TextureTransform {
                tiling: Vec2::new(center_tiling_u, bottom_tiling_v),
                offset: Vec2::new(0.0, bottom_offset_v),
            },
            top:    TextureTransform {
                tiling: Vec2::new(center_tiling_u, top_tiling_v),
                offset: Vec2::new(0.0, top_offset_v),
            },
        }
    }

    pub const fn get(&self, kind: WallPieceKind) -> &TextureTransform {
        match kind {
            WallPieceKind::Left => &self.left,
            WallPieceKind::Right => &self.right,
            WallPieceKind::Bottom => &self.bottom,
            WallPieceKind::Top => &self.top,
        }
    }
}

/// Offset that puts `phase` on the edge at local `V = 1`.
fn end_edge_offset(phase: f32, tiling: f32) -> f32 { wrap_phase(phase - wrap_phase(tiling) + 1.0) }

/// `value mod 1`, always in `[0, 1)`.
pub fn wrap_phase(value: f32) -> f32 {
    let phase = value.rem_euclid(1.0);
    // rem_euclid of a tiny negative rounds up to exactly 1.0 in f32
    if phase >= 1.0 { 0.0 } else { phase }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::layout::side_width;

    const SEAM_TOLERANCE: f32 = 1e-5;

    /// Distance between two phases on the unit circle
    fn phase_distance(a: f32, b: f32) -> f32 {
        let d = wrap_phase(a - b);
        d.min(1.0 - d)
    }

    fn solve(width: f32, height: f32, flipped: bool) -> (WallLayout, WallTextures) {
        let dims = PlaneDimensions::ARENA;
        let layout = WallLayout::new(width, height, &dims, 20.0);
        let density = TextureDensity::new(side_width(40.0 / 3.0, &dims), &dims);
        let textures = WallTextures::align(&layout, density, &dims, flipped);
        (layout, textures)
    }

    fn assert_seams_continuous(width: f32, height: f32, flipped: bool) {
        let (layout, textures) = solve(width, height, flipped);

        for (y, center) in [
            (layout.goal_min_y, WallPieceKind::Bottom),
            (layout.goal_max_y, WallPieceKind::Top),
        ] {
            for side in [WallPieceKind::Left, WallPieceKind::Right] {
                let side_phase = textures
                    .get(side)
                    .v_phase_at(layout.get(side), y, flipped);
                let center_phase = textures
                    .get(center)
                    .v_phase_at(layout.get(center), y, flipped);

                assert!(
                    phase_distance(side_phase, center_phase) < SEAM_TOLERANCE,
                    "{center:?}/{side:?} seam broken at y={y} (flipped={flipped}, \
                     size={width}x{height}): {center_phase} vs {side_phase}"
                );
            }
        }
    }

    #[test]
    fn seams_are_continuous_for_both_facings() {
        for flipped in [false, true] {
            assert_seams_continuous(40.0 / 3.0, 7.5, flipped);
            assert_seams_continuous(14.133, 7.9, flipped);
            assert_seams_continuous(20.0, 11.3, flipped);
            assert_seams_continuous(38.0, 18.0, flipped);
            assert_seams_continuous(3.7, 1.1, flipped);
        }
    }

    #[test]
    fn seam_phase_matches_reference_density_formula() {
        let dims = PlaneDimensions::ARENA;
        for flipped in [false, true] {
            let (layout, textures) = solve(17.0, 9.3, flipped);
            let density = TextureDensity::new(side_width(40.0 / 3.0, &dims), &dims);
            let expected = density.phase_at(layout.goal_min_y, &dims, flipped);
            let actual = textures
                .bottom
                .v_phase_at(&layout.bottom, layout.goal_min_y, flipped);
            assert!(phase_distance(expected, actual) < SEAM_TOLERANCE);
        }
    }

    #[test]
    fn flipping_changes_offsets_but_not_tiling() {
        let (_, south) = solve(14.133, 7.9, false);
        let (_, north) = solve(14.133, 7.9, true);

        assert_eq!(south.bottom.tiling, north.bottom.tiling);
        assert_eq!(south.top.tiling, north.top.tiling);
        assert_ne!(south.bottom.offset, north.bottom.offset);
        assert_ne!(south.top.offset, north.top.offset);
    }

    #[test]
    fn side_pieces_keep_reference_tiling() {
        for flipped in [false, true] {
            let (_, textures) = solve(25.0, 12.0, flipped);
            assert_eq!(textures.left, TextureTransform::REFERENCE);
            assert_eq!(textures.right, TextureTransform::REFERENCE);
        }
    }

    #[test]
    fn offsets_stay_in_unit_range() {
        for flipped in [false, true] {
            for size in [
                Vec2::new(40.0 / 3.0, 7.5),
                Vec2::new(38.0, 18.0),
                Vec2::new(0.5, 0.5),
            ] {
                let (_, textures) = solve(size.x, size.y, flipped);
                for kind in WallPieceKind::ALL {
                    let offset = textures.get(kind).offset;
                    assert!((0.0..1.0).contains(&offset.x), "{kind:?} {offset}");
                    assert!((0.0..1.0).contains(&offset.y), "{kind:?} {offset}");
                }
            }
        }
    }

    #[test]
    fn center_tiling_matches_side_density() {
        let dims = PlaneDimensions::ARENA;
        let (layout, textures) = solve(40.0 / 3.0, 7.5, false);

        // at the initial size the center pieces are as wide as the side pieces
        assert!((textures.bottom.tiling.x - TEXTURE_REFERENCE_TILES).abs() < 1e-4);
        assert!((textures.bottom.tiling.y - layout.goal_min_y / dims.height * 10.0).abs() < 1e-5);
        assert!((textures.top.tiling.y - 6.25 / dims.height * 10.0).abs() < 1e-5);
    }

    #[test]
    fn wrap_phase_is_half_open() {
        assert_eq!(wrap_phase(1.0), 0.0);
        assert_eq!(wrap_phase(-f32::EPSILON / 8.0), 0.0);
        assert!((wrap_phase(-0.25) - 0.75).abs() < 1e-6);
        assert!((wrap_phase(3.125) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn uv_transform_applies_tiling_then_offset() {
        let transform = TextureTransform {
            tiling: Vec2::new(2.0, 3.0),
            offset: Vec2::new(0.25, 0.5),
        };
        let uv = transform.uv_transform().transform_point2(Vec2::new(1.0, 1.0));
        assert!((uv - Vec2::new(2.25, 3.5)).length() < 1e-6);
    }
}
