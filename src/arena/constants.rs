//! Constants for the arena module
//! All magic numbers and configuration values used within arena/

use bevy::color::Color;

// =============================================================================
// Arena Extents
// =============================================================================

/// Width of the arena along X (and of each goal wall)
pub const ARENA_WIDTH: f32 = 40.0;

/// Height of the arena, floor to ceiling
pub const ARENA_HEIGHT: f32 = 20.0;

/// Half of the arena depth along Z; the goal walls sit at `z = ±ARENA_HALF_DEPTH`
pub const ARENA_HALF_DEPTH: f32 = 20.0;

/// Thickness of every arena wall, including the goal wall pieces
pub const WALL_THICKNESS: f32 = 1.0;

// =============================================================================
// Goal Opening
// =============================================================================

/// Thickness of the pocket side/top/bottom/back panels
pub const GOAL_FRAME_THICKNESS: f32 = 0.2;

/// How far the pocket recesses behind the wall
pub const GOAL_POCKET_DEPTH: f32 = 1.5;

/// Starting opening width (a third of the wall)
pub const GOAL_INITIAL_WIDTH: f32 = ARENA_WIDTH / 3.0;

/// Starting opening height (three eighths of the wall)
pub const GOAL_INITIAL_HEIGHT: f32 = ARENA_HEIGHT * 3.0 / 8.0;

/// Width added to an opening on every wall hit
pub const GOAL_WIDTH_GROWTH: f32 = 0.8;

/// Height added to an opening on every wall hit
pub const GOAL_HEIGHT_GROWTH: f32 = 0.4;

/// Wall kept on each side of a fully grown opening
pub const GOAL_EDGE_MARGIN: f32 = 1.0;

/// Smallest extent an opening can be clamped to
pub const MIN_OPENING_EXTENT: f32 = 0.01;

// =============================================================================
// Wall Texture
// =============================================================================

/// Tiles per axis on the full-height side pieces; every other piece matches their density
pub const TEXTURE_REFERENCE_TILES: f32 = 10.0;

/// Repeating texture shared by the goal wall pieces
pub const WALL_TEXTURE_PATH: &str = "textures/wall.png";

/// Tint applied over the wall texture
pub const WALL_BASE_COLOR: Color = Color::srgb(0.85, 0.87, 0.9);

/// Pocket panels are untextured
pub const POCKET_COLOR: Color = Color::srgb(0.18, 0.2, 0.26);

/// Floor, ceiling and side walls
pub const ENCLOSURE_COLOR: Color = Color::srgb(0.3, 0.33, 0.4);

/// Perceptual roughness for every arena surface
pub const ARENA_PERCEPTUAL_ROUGHNESS: f32 = 0.8;
