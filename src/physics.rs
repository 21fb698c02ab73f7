use avian3d::prelude::*;
use bevy::input::common_conditions::input_just_pressed;
use bevy::prelude::*;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(avian3d::PhysicsPlugins::default())
            .add_plugins(PhysicsDebugPlugin)
            .insert_resource(SubstepCount(15))
            .add_systems(Startup, init_physics_debug)
            .add_systems(
                Update,
                toggle_physics_debug.run_if(input_just_pressed(KeyCode::F3)),
            );
    }
}

/// Which collision group an arena body belongs to.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    Ball,
    /// Goal wall pieces and the arena enclosure
    Wall,
    /// Goal pocket panels
    Goal,
}

fn init_physics_debug(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<PhysicsGizmos>();
    config.enabled = false;
}

fn toggle_physics_debug(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<PhysicsGizmos>();
    config.enabled = !config.enabled;
    info!("Physics debug: {}", config.enabled);
}
