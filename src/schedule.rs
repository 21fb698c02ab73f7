use bevy::prelude::*;

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum InGameSet {
    CollisionDetection,
    EntityUpdates,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        // collisions route first so goal resizes and ball resets land before entity updates
        const IN_GAME_SETS: (InGameSet, InGameSet) =
            (InGameSet::CollisionDetection, InGameSet::EntityUpdates);

        app.configure_sets(Update, IN_GAME_SETS.chain())
            .configure_sets(FixedUpdate, IN_GAME_SETS.chain());
    }
}
