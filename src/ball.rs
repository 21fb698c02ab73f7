use avian3d::prelude::*;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
use rand::{Rng, RngExt};

use crate::physics::GameLayer;
use crate::schedule::InGameSet;

const BALL_COLOR: Color = Color::srgb(0.95, 0.55, 0.15);

pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BallConfig>()
            .add_plugins(
                ResourceInspectorPlugin::<BallConfig>::default()
                    .run_if(input_toggle_active(false, KeyCode::F4)),
            )
            .add_observer(on_reset_ball)
            .add_systems(Startup, spawn_ball)
            .add_systems(Update, relaunch_balls.in_set(InGameSet::EntityUpdates));
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, Clone, PartialEq)]
#[reflect(Resource, InspectorOptions)]
pub struct BallConfig {
    #[inspector(min = 0.1, max = 2.0, display = NumberDisplay::Slider)]
    pub radius:       f32,
    #[inspector(min = 0.1, max = 5.0, display = NumberDisplay::Slider)]
    pub mass:         f32,
    #[inspector(min = 0.0, max = 30.0, display = NumberDisplay::Slider)]
    pub launch_speed: f32,
    /// Seconds the ball stays frozen after a goal
    #[inspector(min = 0.0, max = 5.0, display = NumberDisplay::Slider)]
    pub reset_delay:  f32,
    #[inspector(min = 1.0, max = 19.0, display = NumberDisplay::Slider)]
    pub spawn_height: f32,
    /// Height the ball is re-centred at before a relaunch
    #[inspector(min = 1.0, max = 19.0, display = NumberDisplay::Slider)]
    pub reset_height: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius:       0.5,
            mass:         0.5,
            launch_speed: 3.0,
            reset_delay:  1.5,
            spawn_height: 5.0,
            reset_height: 5.0,
        }
    }
}

fn zero_gravity() -> GravityScale { GravityScale(0.) }

// perfectly bouncy and frictionless; Max/Min combine rules make the walls behave the same way
const fn bouncy() -> Restitution {
    Restitution {
        coefficient:  1.0,
        combine_rule: CoefficientCombine::Max,
    }
}

fn frictionless() -> Friction { Friction::new(0.0).with_combine_rule(CoefficientCombine::Min) }

#[derive(Component, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    CollisionEventsEnabled,
    RigidBody::Dynamic,
    GravityScale = zero_gravity(),
    Restitution = bouncy(),
    Friction = frictionless(),
    SweptCcd
)]
pub struct Ball;

/// Present while a ball sits frozen waiting to be relaunched after a goal
#[derive(Component, Debug)]
pub struct PendingRelaunch {
    timer:         Timer,
    launch_z_sign: f32,
}

/// Freezes the ball and schedules a relaunch from the arena centre.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ResetBall {
    pub entity:        Entity,
    /// Sign of the relaunch direction's z component
    pub launch_z_sign: f32,
}

fn spawn_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<BallConfig>,
) {
    let direction = random_unit_vector(&mut rand::rng());

    commands.spawn((
        Ball,
        Name::new("Ball"),
        Mesh3d(meshes.add(Sphere::new(config.radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BALL_COLOR,
            ..default()
        })),
        Transform::from_xyz(0.0, config.spawn_height, 0.0),
        Collider::sphere(config.radius),
        Mass(config.mass),
        CollisionLayers::new([GameLayer::Ball], [GameLayer::Wall, GameLayer::Goal]),
        LinearVelocity(direction * config.launch_speed),
    ));
}

pub(crate) fn on_reset_ball(
    reset: On<ResetBall>,
    config: Res<BallConfig>,
    mut commands: Commands,
    mut balls: Query<(&mut LinearVelocity, &mut AngularVelocity), With<Ball>>,
) {
    let Ok((mut linear, mut angular)) = balls.get_mut(reset.entity) else {
        warn!("ResetBall targeted {} which is not a ball", reset.entity);
        return;
    };

    linear.0 = Vec3::ZERO;
    angular.0 = Vec3::ZERO;

    commands.entity(reset.entity).insert((RigidBody::Kinematic, PendingRelaunch {
        timer:         Timer::from_seconds(config.reset_delay, TimerMode::Once),
        launch_z_sign: reset.launch_z_sign,
    }));
}

fn relaunch_balls(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<BallConfig>,
    mut balls: Query<
        (
            Entity,
            &mut PendingRelaunch,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Ball>,
    >,
) {
    for (entity, mut pending, mut transform, mut velocity) in &mut balls {
        pending.timer.tick(time.delta());
        if !pending.timer.just_finished() {
            continue;
        }

        transform.translation = Vec3::new(0.0, config.reset_height, 0.0);
        commands.entity(entity).insert(RigidBody::Dynamic);
        velocity.0 = biased_launch_direction(pending.launch_z_sign, &mut rand::rng())
            * config.launch_speed;

        commands.entity(entity).remove::<PendingRelaunch>();
        debug!("ball relaunched with velocity {}", velocity.0);
    }
}

/// Uniform over the unit sphere: samples outside the unit ball are rejected
/// so directions near the cube's corners are not over-represented.
fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        let length_squared = candidate.length_squared();
        if length_squared <= 1.0 && length_squared > 1e-6 {
            return candidate / length_squared.sqrt();
        }
    }
}

/// Random unit direction whose z component has the sign of `z_sign` (or is zero).
fn biased_launch_direction(z_sign: f32, rng: &mut impl Rng) -> Vec3 {
    let mut direction = random_unit_vector(rng);
    direction.z = direction.z.abs() * z_sign.signum();
    direction
}
