mod constants;
mod dimensions;
mod enclosure;
mod goal;
mod goal_trigger;
mod layout;
mod opening;
mod pocket;
mod texture_alignment;
mod types;

use bevy::prelude::*;

pub use crate::arena::constants::ARENA_HALF_DEPTH;
pub use crate::arena::dimensions::PlaneDimensions;
use crate::arena::enclosure::EnclosurePlugin;
use crate::arena::goal::GoalPlugin;
use crate::arena::goal_trigger::GoalTriggerPlugin;
pub use crate::arena::goal_trigger::Score;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlaneDimensions>()
            .register_type::<PlaneDimensions>()
            .add_plugins(EnclosurePlugin)
            .add_plugins(GoalPlugin)
            .add_plugins(GoalTriggerPlugin);
    }
}
