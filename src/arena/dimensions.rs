use bevy::prelude::*;

use super::constants::ARENA_HEIGHT;
use super::constants::ARENA_WIDTH;
use super::constants::GOAL_EDGE_MARGIN;
use super::constants::GOAL_FRAME_THICKNESS;
use super::constants::GOAL_POCKET_DEPTH;
use super::constants::MIN_OPENING_EXTENT;
use super::constants::WALL_THICKNESS;

/// Fixed measurements of a goal wall plane and the pocket cut into it.
///
/// Inserted once as a resource and never mutated; construction and every
/// later resize read the same values.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Resource)]
pub struct PlaneDimensions {
    pub width:           f32,
    pub height:          f32,
    pub wall_thickness:  f32,
    pub frame_thickness: f32,
    pub pocket_depth:    f32,
}

const _: () = assert!(PlaneDimensions::ARENA.is_valid());

impl Default for PlaneDimensions {
    fn default() -> Self { Self::ARENA }
}

impl PlaneDimensions {
    pub const ARENA: Self = Self {
        width:           ARENA_WIDTH,
        height:          ARENA_HEIGHT,
        wall_thickness:  WALL_THICKNESS,
        frame_thickness: GOAL_FRAME_THICKNESS,
        pocket_depth:    GOAL_POCKET_DEPTH,
    };

    /// The frame must fit inside half the wall and the pocket must have depth.
    pub const fn is_valid(&self) -> bool {
        self.width > 2.0 * GOAL_EDGE_MARGIN
            && self.height > 2.0 * GOAL_EDGE_MARGIN
            && self.frame_thickness < self.height / 2.0
            && self.pocket_depth > 0.0
            && self.wall_thickness > 0.0
    }

    pub const fn center_y(&self) -> f32 { self.height / 2.0 }

    /// Largest opening this plane allows: a margin of wall is always left on every side.
    pub const fn max_opening(&self) -> Vec2 {
        Vec2::new(
            self.width - 2.0 * GOAL_EDGE_MARGIN,
            self.height - 2.0 * GOAL_EDGE_MARGIN,
        )
    }

    /// Clamps a requested opening size into `(0, W - 2] × (0, H - 2]`.
    pub fn clamp_opening(&self, size: Vec2) -> Vec2 {
        let max = self.max_opening();
        Vec2::new(
            size.x.clamp(MIN_OPENING_EXTENT, max.x),
            size.y.clamp(MIN_OPENING_EXTENT, max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_dimensions_are_valid() {
        assert!(PlaneDimensions::ARENA.is_valid());
        assert_eq!(PlaneDimensions::ARENA.max_opening(), Vec2::new(38.0, 18.0));
    }

    #[test]
    fn frame_thicker_than_half_the_wall_is_invalid() {
        let dims = PlaneDimensions {
            frame_thickness: 10.0,
            ..PlaneDimensions::ARENA
        };
        assert!(!dims.is_valid());

        let shallow = PlaneDimensions {
            pocket_depth: 0.0,
            ..PlaneDimensions::ARENA
        };
        assert!(!shallow.is_valid());
    }

    #[test]
    fn clamp_opening_keeps_both_axes_in_range() {
        let dims = PlaneDimensions::ARENA;

        assert_eq!(
            dims.clamp_opening(Vec2::new(100.0, 100.0)),
            Vec2::new(38.0, 18.0)
        );

        let tiny = dims.clamp_opening(Vec2::new(-3.0, 0.0));
        assert!(tiny.x > 0.0 && tiny.y > 0.0);

        let inside = Vec2::new(12.0, 6.0);
        assert_eq!(dims.clamp_opening(inside), inside);
    }
}
