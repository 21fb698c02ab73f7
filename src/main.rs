//! Goal Wall - a ball arena built with Bevy 0.18
//!
//! Two end walls each have a goal opening cut into them:
//! - Hitting the wall around a goal makes that goal bigger
//! - Wall textures stay seamless across the pieces at every size
//! - Scoring snaps the goal back and relaunches the ball from the centre
//! - A HUD shows the score and the ball's speed

mod arena;
mod ball;
mod camera;
mod hud;
mod physics;
mod schedule;

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::arena::ArenaPlugin;
use crate::ball::BallPlugin;
use crate::camera::CameraPlugin;
use crate::hud::HudPlugin;
use crate::physics::PhysicsPlugin;
use crate::schedule::SchedulePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "goal wall".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            EguiPlugin::default(),
            ArenaPlugin,
            BallPlugin,
            CameraPlugin,
            HudPlugin,
            PhysicsPlugin,
            SchedulePlugin,
        ))
        .run();
}
