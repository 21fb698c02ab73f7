use bevy::prelude::*;

use super::dimensions::PlaneDimensions;
use super::layout::WallLayout;
use super::layout::side_width;
use super::pocket::PocketLayout;
use super::texture_alignment::TextureDensity;
use super::texture_alignment::WallTextures;
use super::types::GoalSide;

/// Current and starting size of one goal opening.
///
/// `width`/`height` only change through [`Opening::grow`] and
/// [`Opening::reset_size`], both of which keep them inside
/// [`PlaneDimensions::clamp_opening`].
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct Opening {
    width:                f32,
    height:               f32,
    initial_width:        f32,
    initial_height:       f32,
    side:                 GoalSide,
    /// Side-piece width at the starting size; horizontal texel density is measured on it
    reference_side_width: f32,
}

impl Opening {
    pub fn new(side: GoalSide, initial_size: Vec2, dims: &PlaneDimensions) -> Self {
        let clamped = dims.clamp_opening(initial_size);
        if clamped != initial_size {
            warn!("{side} goal: initial opening {initial_size} clamped to {clamped}");
        }

        Self {
            width: clamped.x,
            height: clamped.y,
            initial_width: clamped.x,
            initial_height: clamped.y,
            side,
            reference_side_width: side_width(clamped.x, dims),
        }
    }

    pub const fn size(&self) -> Vec2 { Vec2::new(self.width, self.height) }

    pub const fn initial_size(&self) -> Vec2 { Vec2::new(self.initial_width, self.initial_height) }

    pub const fn side(&self) -> GoalSide { self.side }

    /// Widens and heightens the opening, capped at the plane's maximum.
    /// Returns whether the size actually changed.
    pub fn grow(&mut self, delta: Vec2, dims: &PlaneDimensions) -> bool {
        let grown = dims.clamp_opening(self.size() + delta);
        self.set_size(grown)
    }

    /// Snaps back to the size captured at construction.
    /// Returns whether the size actually changed.
    pub fn reset_size(&mut self) -> bool { self.set_size(self.initial_size()) }

    fn set_size(&mut self, size: Vec2) -> bool {
        let changed = size != self.size();
        self.width = size.x;
        self.height = size.y;
        changed
    }

    pub fn geometry(&self, dims: &PlaneDimensions) -> OpeningGeometry {
        OpeningGeometry::compute(
            self.width,
            self.height,
            self.side,
            self.reference_side_width,
            dims,
        )
    }
}

/// Everything derived from an opening's size: the four wall pieces, their
/// texture transforms and the five pocket panels.
///
/// Construction and every resize go through [`OpeningGeometry::compute`], so the
/// same size always yields the same bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningGeometry {
    pub walls:    WallLayout,
    pub textures: WallTextures,
    pub pocket:   PocketLayout,
}

impl OpeningGeometry {
    pub fn compute(
        width: f32,
        height: f32,
        side: GoalSide,
        reference_side_width: f32,
        dims: &PlaneDimensions,
    ) -> Self {
        let walls = WallLayout::new(width, height, dims, side.plane_z());
        let density = TextureDensity::new(reference_side_width, dims);
        let textures = WallTextures::align(&walls, density, dims, side.is_texture_flipped());
        let pocket = PocketLayout::new(width, height, dims, side);

        Self {
            walls,
            textures,
            pocket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::constants::GOAL_HEIGHT_GROWTH;
    use crate::arena::constants::GOAL_INITIAL_HEIGHT;
    use crate::arena::constants::GOAL_INITIAL_WIDTH;
    use crate::arena::constants::GOAL_WIDTH_GROWTH;

    const GROWTH: Vec2 = Vec2::new(GOAL_WIDTH_GROWTH, GOAL_HEIGHT_GROWTH);

    fn arena_opening(side: GoalSide) -> Opening {
        Opening::new(
            side,
            Vec2::new(GOAL_INITIAL_WIDTH, GOAL_INITIAL_HEIGHT),
            &PlaneDimensions::ARENA,
        )
    }

    #[test]
    fn one_grow_adds_the_configured_deltas() {
        let dims = PlaneDimensions::ARENA;
        let mut opening = arena_opening(GoalSide::North);

        assert!(opening.grow(GROWTH, &dims));

        let size = opening.size();
        assert!((size.x - 14.133).abs() < 1e-3, "width {}", size.x);
        assert!((size.y - 7.9).abs() < 1e-5, "height {}", size.y);
    }

    #[test]
    fn repeated_grows_are_monotonic_and_capped() {
        let dims = PlaneDimensions::ARENA;
        let mut opening = arena_opening(GoalSide::South);
        let mut previous = opening.size();

        for _ in 0..6 {
            opening.grow(GROWTH, &dims);
        }
        assert!(opening.size().x < 38.0, "six grows must not reach the cap yet");

        for _ in 0..60 {
            opening.grow(GROWTH, &dims);
            let size = opening.size();
            assert!(size.x >= previous.x && size.y >= previous.y);
            assert!(size.x <= 38.0 && size.y <= 18.0);
            previous = size;
        }

        assert_eq!(opening.size(), Vec2::new(38.0, 18.0));
        // at the cap, growing is a no-op
        let geometry = opening.geometry(&dims);
        assert!(!opening.grow(GROWTH, &dims));
        assert_eq!(opening.geometry(&dims), geometry);
    }

    #[test]
    fn reset_restores_the_initial_size_exactly() {
        let dims = PlaneDimensions::ARENA;
        let mut opening = arena_opening(GoalSide::North);
        let initial = opening.size();

        for _ in 0..11 {
            opening.grow(GROWTH, &dims);
        }
        assert!(opening.reset_size());
        assert_eq!(opening.size(), initial);
        assert_eq!(opening.initial_size(), initial);

        // second reset changes nothing
        assert!(!opening.reset_size());
        assert_eq!(opening.size(), initial);
    }

    #[test]
    fn resize_reproduces_construction_geometry_bit_for_bit() {
        let dims = PlaneDimensions::ARENA;
        for side in GoalSide::ALL {
            let mut opening = arena_opening(side);
            let constructed = opening.geometry(&dims);

            for _ in 0..7 {
                opening.grow(GROWTH, &dims);
            }
            assert_ne!(opening.geometry(&dims), constructed);

            opening.reset_size();
            assert_eq!(opening.geometry(&dims), constructed);
        }
    }

    #[test]
    fn oversized_initial_size_is_clamped() {
        let dims = PlaneDimensions::ARENA;
        let opening = Opening::new(GoalSide::North, Vec2::new(90.0, -1.0), &dims);

        assert_eq!(opening.size().x, 38.0);
        assert!(opening.size().y > 0.0);
        assert_eq!(opening.initial_size(), opening.size());
    }

    #[test]
    fn negative_deltas_never_collapse_the_opening() {
        let dims = PlaneDimensions::ARENA;
        let mut opening = arena_opening(GoalSide::North);
        opening.grow(Vec2::new(-100.0, -100.0), &dims);

        assert!(opening.size().x > 0.0 && opening.size().y > 0.0);
        let geometry = opening.geometry(&dims);
        assert!(geometry.walls.left.size.x > 0.0);
        assert!(geometry.walls.bottom.size.y > 0.0);
    }

    #[test]
    fn north_and_south_differ_only_where_facing_matters() {
        let dims = PlaneDimensions::ARENA;
        let north = arena_opening(GoalSide::North).geometry(&dims);
        let south = arena_opening(GoalSide::South).geometry(&dims);

        assert_eq!(north.walls.left.size, south.walls.left.size);
        assert_eq!(north.walls.left.position.z, -south.walls.left.position.z);
        assert_eq!(north.textures.bottom.tiling, south.textures.bottom.tiling);
        assert_ne!(north.textures.bottom.offset, south.textures.bottom.offset);
        assert_eq!(north.pocket.back.position.z, -south.pocket.back.position.z);
    }
}
