use std::fmt;

use bevy::prelude::*;

use super::constants::ARENA_HALF_DEPTH;

/// Which of the two goal walls an opening is cut into.
///
/// North sits at `+z` and faces the arena through its `-Z` face, South sits at
/// `-z` and faces the arena through its `+Z` face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum GoalSide {
    #[default]
    North,
    South,
}

impl GoalSide {
    pub const ALL: [Self; 2] = [Self::North, Self::South];

    /// `+1` when the wall's outward direction (away from the arena) is `+z`.
    pub const fn facing_sign(self) -> f32 {
        match self {
            Self::North => 1.0,
            Self::South => -1.0,
        }
    }

    /// Z coordinate of the wall plane's centre
    pub const fn plane_z(self) -> f32 { self.facing_sign() * ARENA_HALF_DEPTH }

    /// The visible `-Z` face of a cuboid runs its V coordinate top to bottom,
    /// so the North wall sees a mirrored texture frame.
    pub const fn is_texture_flipped(self) -> bool { self.facing_sign() > 0.0 }

    /// Who is credited when the ball reaches this goal's back panel
    pub const fn scorer(self) -> Scorer {
        match self {
            Self::North => Scorer::Player,
            Self::South => Scorer::Opponent,
        }
    }
}

impl fmt::Display for GoalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::South => write!(f, "South"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Scorer {
    Player,
    Opponent,
}

impl Scorer {
    /// Relaunch direction after a goal: away from the player spawn when the
    /// player scored, toward it when the opponent did.
    pub const fn launch_z_sign(self) -> f32 {
        match self {
            Self::Player => 1.0,
            Self::Opponent => -1.0,
        }
    }
}
