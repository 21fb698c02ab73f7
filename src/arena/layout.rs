use bevy::prelude::*;

use super::dimensions::PlaneDimensions;

/// Position (centre) and full extents of one axis-aligned box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct PieceGeometry {
    pub position: Vec3,
    pub size:     Vec3,
}

impl PieceGeometry {
    pub const fn new(position: Vec3, size: Vec3) -> Self { Self { position, size } }

    pub fn min(&self) -> Vec3 { self.position - self.size / 2.0 }

    pub fn max(&self) -> Vec3 { self.position + self.size / 2.0 }

    /// Pieces are unit cuboids scaled up to their size, so the size becomes the scale.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_scale(self.size)
    }

    /// Writes position and size without touching rotation.
    pub fn write_to(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.scale = self.size;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum WallPieceKind {
    Left,
    Right,
    Bottom,
    Top,
}

impl WallPieceKind {
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Bottom, Self::Top];

    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Top => 3,
        }
    }
}

/// The four wall pieces that, together with the opening, cover the whole wall plane.
///
/// Left and Right run the full wall height on either side of the opening;
/// Bottom and Top span the opening width below and above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallLayout {
    pub left:          PieceGeometry,
    pub right:         PieceGeometry,
    pub bottom:        PieceGeometry,
    pub top:           PieceGeometry,
    pub opening_width: f32,
    pub goal_min_y:    f32,
    pub goal_max_y:    f32,
}

impl WallLayout {
    /// Expects `width`/`height` already clamped so every piece has positive extent.
    pub fn new(width: f32, height: f32, dims: &PlaneDimensions, plane_z: f32) -> Self {
        let center_y = dims.center_y();
        let side_width = side_width(width, dims);
        let side_x = width / 2.0 + side_width / 2.0;

        let goal_min_y = center_y - height / 2.0;
        let goal_max_y = center_y + height / 2.0;
        let top_height = dims.height - goal_max_y;

        let side_size = Vec3::new(side_width, dims.height, dims.wall_thickness);

        Self {
            left: PieceGeometry::new(Vec3::new(-side_x, center_y, plane_z), side_size),
            right: PieceGeometry::new(Vec3::new(side_x, center_y, plane_z), side_size),
            bottom: PieceGeometry::new(
                Vec3::new(0.0, goal_min_y / 2.0, plane_z),
                Vec3::new(width, goal_min_y, dims.wall_thickness),
            ),
            top: PieceGeometry::new(
                Vec3::new(0.0, goal_max_y + top_height / 2.0, plane_z),
                Vec3::new(width, top_height, dims.wall_thickness),
            ),
            opening_width: width,
            goal_min_y,
            goal_max_y,
        }
    }

    pub const fn get(&self, kind: WallPieceKind) -> &PieceGeometry {
        match kind {
            WallPieceKind::Left => &self.left,
            WallPieceKind::Right => &self.right,
            WallPieceKind::Bottom => &self.bottom,
            WallPieceKind::Top => &self.top,
        }
    }
}

/// Width of each full-height piece beside an opening of `width`
pub fn side_width(width: f32, dims: &PlaneDimensions) -> f32 { (dims.width - width) / 2.0 }

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_close(a: f32, b: f32, what: &str) {
        assert!((a - b).abs() < TOLERANCE, "{what}: {a} != {b}");
    }

    fn area(piece: &PieceGeometry) -> f32 { piece.size.x * piece.size.y }

    fn sample_openings(dims: &PlaneDimensions) -> Vec<Vec2> {
        let max = dims.max_opening();
        let mut sizes = Vec::new();
        for w_step in 1..=8 {
            for h_step in 1..=8 {
                #[allow(clippy::cast_precision_loss, reason = "step counts are tiny")]
                let size = Vec2::new(max.x * w_step as f32 / 8.0, max.y * h_step as f32 / 8.0);
                sizes.push(size);
            }
        }
        sizes.push(Vec2::new(40.0 / 3.0, 7.5));
        sizes
    }

    #[test]
    fn pieces_and_opening_partition_the_wall() {
        let dims = PlaneDimensions::ARENA;

        for size in sample_openings(&dims) {
            let layout = WallLayout::new(size.x, size.y, &dims, 20.0);
            let pieces_area: f32 = WallPieceKind::ALL
                .iter()
                .map(|kind| area(layout.get(*kind)))
                .sum();

            assert_close(
                pieces_area + size.x * size.y,
                dims.width * dims.height,
                "area sum",
            );

            // outer boundary
            assert_close(layout.left.min().x, -dims.width / 2.0, "left outer edge");
            assert_close(layout.right.max().x, dims.width / 2.0, "right outer edge");
            assert_close(layout.bottom.min().y, 0.0, "floor edge");
            assert_close(layout.top.max().y, dims.height, "ceiling edge");

            // seams coincide, so nothing overlaps and nothing is left uncovered
            assert_close(layout.left.max().x, layout.bottom.min().x, "left/bottom seam");
            assert_close(layout.left.max().x, layout.top.min().x, "left/top seam");
            assert_close(layout.right.min().x, layout.bottom.max().x, "right/bottom seam");
            assert_close(layout.right.min().x, layout.top.max().x, "right/top seam");
            assert_close(layout.left.max().x, -size.x / 2.0, "opening left edge");
            assert_close(layout.bottom.max().y, layout.goal_min_y, "opening bottom edge");
            assert_close(layout.top.min().y, layout.goal_max_y, "opening top edge");
            assert_close(layout.goal_max_y - layout.goal_min_y, size.y, "opening height");

            for kind in WallPieceKind::ALL {
                let piece = layout.get(kind);
                assert!(piece.size.min_element() > 0.0, "{kind:?} collapsed at {size}");
                assert_eq!(piece.size.z, dims.wall_thickness);
                assert_eq!(piece.position.z, 20.0);
            }
        }
    }

    #[test]
    fn left_and_right_mirror_each_other() {
        let dims = PlaneDimensions::ARENA;

        for size in sample_openings(&dims) {
            let layout = WallLayout::new(size.x, size.y, &dims, -20.0);
            assert_eq!(layout.left.size, layout.right.size);
            assert_eq!(layout.left.position.x, -layout.right.position.x);
            assert_eq!(layout.left.position.y, dims.center_y());
        }
    }

    #[test]
    fn initial_goal_layout_matches_hand_computed_values() {
        let dims = PlaneDimensions::ARENA;
        let layout = WallLayout::new(40.0 / 3.0, 7.5, &dims, 20.0);

        assert_close(layout.left.size.x, 40.0 / 3.0, "side width");
        assert_close(layout.goal_min_y, 6.25, "goal min y");
        assert_close(layout.goal_max_y, 13.75, "goal max y");
        assert_close(layout.bottom.position.y, 3.125, "bottom centre");
        assert_close(layout.top.position.y, 16.875, "top centre");
        assert_close(layout.top.size.y, 6.25, "top height");
    }

    #[test]
    fn transform_scale_is_piece_size() {
        let piece = PieceGeometry::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let transform = piece.transform();
        assert_eq!(transform.translation, piece.position);
        assert_eq!(transform.scale, piece.size);

        let mut rotated = Transform::from_rotation(Quat::from_rotation_y(1.0));
        piece.write_to(&mut rotated);
        assert_eq!(rotated.translation, piece.position);
        assert_eq!(rotated.rotation, Quat::from_rotation_y(1.0));
    }
}
