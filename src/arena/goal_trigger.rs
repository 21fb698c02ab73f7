use avian3d::prelude::*;
use bevy::prelude::*;

use super::goal::GrowGoal;
use super::goal::ResetGoal;
use super::types::Scorer;
use crate::ball::Ball;
use crate::ball::PendingRelaunch;
use crate::ball::ResetBall;
use crate::schedule::InGameSet;

pub struct GoalTriggerPlugin;

impl Plugin for GoalTriggerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>().add_systems(
            FixedUpdate,
            route_ball_collisions.in_set(InGameSet::CollisionDetection),
        );
    }
}

/// One of the four wall pieces around a goal; the ball hitting it grows that goal.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct GoalWallPiece {
    pub goal: Entity,
}

/// The back of a goal's pocket; the ball reaching it is a score.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct GoalBackPanel {
    pub goal:   Entity,
    pub scorer: Scorer,
}

#[derive(Resource, Reflect, Debug, Default, Clone, PartialEq, Eq)]
#[reflect(Resource)]
pub struct Score {
    pub player:   u32,
    pub opponent: u32,
}

impl Score {
    pub const fn record(&mut self, scorer: Scorer) {
        match scorer {
            Scorer::Player => self.player += 1,
            Scorer::Opponent => self.opponent += 1,
        }
    }
}

fn route_ball_collisions(
    mut collision_events: MessageReader<CollisionStart>,
    balls: Query<Has<PendingRelaunch>, With<Ball>>,
    wall_pieces: Query<&GoalWallPiece>,
    back_panels: Query<&GoalBackPanel>,
    mut score: ResMut<Score>,
    mut commands: Commands,
) {
    // a relaunch is only queued through commands, so guard against a second
    // back-panel contact arriving in the same batch
    let mut scored_balls: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        for (ball, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok(relaunch_pending) = balls.get(ball) else {
                continue;
            };

            if let Ok(piece) = wall_pieces.get(other) {
                commands.trigger(GrowGoal { entity: piece.goal });
            } else if let Ok(back) = back_panels.get(other)
                && !relaunch_pending
                && !scored_balls.contains(&ball)
            {
                scored_balls.push(ball);
                score.record(back.scorer);
                info!(
                    "{:?} scored | player {} : {} opponent",
                    back.scorer, score.player, score.opponent
                );
                commands.trigger(ResetGoal { entity: back.goal });
                commands.trigger(ResetBall {
                    entity:        ball,
                    launch_z_sign: back.scorer.launch_z_sign(),
                });
            }
        }
    }
}
