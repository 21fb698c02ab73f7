use bevy::prelude::*;

use crate::arena::ARENA_HALF_DEPTH;
use crate::arena::PlaneDimensions;

const CAMERA_HEIGHT_FACTOR: f32 = 1.6;
const CAMERA_SIDE_OFFSET: f32 = 2.2;
const LIGHT_ILLUMINANCE: f32 = 4_000.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) { app.add_systems(Startup, (spawn_camera, spawn_light)); }
}

#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct ArenaCamera;

// looks across the arena from the east so both goal walls stay in frame
fn spawn_camera(mut commands: Commands, dims: Res<PlaneDimensions>) {
    let target = Vec3::new(0.0, dims.center_y(), 0.0);
    let eye = Vec3::new(
        ARENA_HALF_DEPTH * CAMERA_SIDE_OFFSET,
        dims.height * CAMERA_HEIGHT_FACTOR,
        0.0,
    );

    commands.spawn((
        ArenaCamera,
        Name::new("ArenaCamera"),
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(target, Vec3::Y),
    ));
}

fn spawn_light(mut commands: Commands, dims: Res<PlaneDimensions>) {
    commands.spawn((
        Name::new("ArenaLight"),
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(dims.width / 4.0, dims.height * 2.0, ARENA_HALF_DEPTH / 2.0)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
