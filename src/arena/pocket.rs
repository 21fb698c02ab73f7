use bevy::prelude::*;

use super::dimensions::PlaneDimensions;
use super::layout::PieceGeometry;
use super::types::GoalSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PocketPanelKind {
    Left,
    Right,
    Top,
    Bottom,
    Back,
}

impl PocketPanelKind {
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Top, Self::Bottom, Self::Back];

    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Bottom => 3,
            Self::Back => 4,
        }
    }
}

/// Five panels forming the recessed box behind an opening, in the pocket frame
/// (origin at the opening centre on the wall's inner face, `+z` outward for North).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PocketLayout {
    pub left:   PieceGeometry,
    pub right:  PieceGeometry,
    pub top:    PieceGeometry,
    pub bottom: PieceGeometry,
    pub back:   PieceGeometry,
}

impl PocketLayout {
    pub fn new(width: f32, height: f32, dims: &PlaneDimensions, side: GoalSide) -> Self {
        let frame = dims.frame_thickness;
        let depth = dims.pocket_depth;
        let outward_depth = side.facing_sign() * depth;
        let mid_z = outward_depth / 2.0;
        let framed_width = 2.0f32.mul_add(frame, width);

        let side_size = Vec3::new(frame, height, depth);
        let cap_size = Vec3::new(framed_width, frame, depth);

        Self {
            left:   PieceGeometry::new(Vec3::new(-width / 2.0, 0.0, mid_z), side_size),
            right:  PieceGeometry::new(Vec3::new(width / 2.0, 0.0, mid_z), side_size),
            top:    PieceGeometry::new(Vec3::new(0.0, height / 2.0, mid_z), cap_size),
            bottom: PieceGeometry::new(Vec3::new(0.0, -height / 2.0, mid_z), cap_size),
            back:   PieceGeometry::new(
                Vec3::new(0.0, 0.0, outward_depth),
                Vec3::new(framed_width, 2.0f32.mul_add(frame, height), frame),
            ),
        }
    }

    pub const fn get(&self, kind: PocketPanelKind) -> &PieceGeometry {
        match kind {
            PocketPanelKind::Left => &self.left,
            PocketPanelKind::Right => &self.right,
            PocketPanelKind::Top => &self.top,
            PocketPanelKind::Bottom => &self.bottom,
            PocketPanelKind::Back => &self.back,
        }
    }
}

/// World position of the pocket frame: the opening centre on the wall face that looks into the arena.
pub fn pocket_origin(dims: &PlaneDimensions, side: GoalSide) -> Vec3 {
    let inner_face_z = side.plane_z() - side.facing_sign() * (dims.wall_thickness / 2.0);
    Vec3::new(0.0, dims.center_y(), inner_face_z)
}
