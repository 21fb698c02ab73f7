use avian3d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::image::ImageAddressMode;
use bevy::image::ImageLoaderSettings;
use bevy::image::ImageSampler;
use bevy::image::ImageSamplerDescriptor;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use super::constants::ARENA_PERCEPTUAL_ROUGHNESS;
use super::constants::GOAL_HEIGHT_GROWTH;
use super::constants::GOAL_INITIAL_HEIGHT;
use super::constants::GOAL_INITIAL_WIDTH;
use super::constants::GOAL_WIDTH_GROWTH;
use super::constants::POCKET_COLOR;
use super::constants::WALL_BASE_COLOR;
use super::constants::WALL_TEXTURE_PATH;
use super::dimensions::PlaneDimensions;
use super::goal_trigger::GoalBackPanel;
use super::goal_trigger::GoalWallPiece;
use super::layout::WallPieceKind;
use super::opening::Opening;
use super::opening::OpeningGeometry;
use super::pocket::PocketPanelKind;
use super::pocket::pocket_origin;
use super::texture_alignment::TextureTransform;
use super::types::GoalSide;
use crate::physics::GameLayer;

pub struct GoalPlugin;

impl Plugin for GoalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GoalConfig>()
            .add_plugins(
                ResourceInspectorPlugin::<GoalConfig>::default()
                    .run_if(input_toggle_active(false, KeyCode::F2)),
            )
            .add_observer(on_grow_goal)
            .add_observer(on_reset_goal)
            .add_systems(Startup, spawn_goals);
    }
}

/// Growth applied on every wall hit, live-editable.
///
/// The starting opening size is fixed at `GOAL_INITIAL_SIZE`; goals are only
/// built at startup, so it is not exposed here.
#[derive(Resource, Reflect, InspectorOptions, Debug, Clone, PartialEq)]
#[reflect(Resource, InspectorOptions)]
pub struct GoalConfig {
    #[inspector(min = 0.0, max = 5.0, display = NumberDisplay::Slider)]
    pub width_growth:  f32,
    #[inspector(min = 0.0, max = 5.0, display = NumberDisplay::Slider)]
    pub height_growth: f32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            width_growth:  GOAL_WIDTH_GROWTH,
            height_growth: GOAL_HEIGHT_GROWTH,
        }
    }
}

impl GoalConfig {
    pub const fn growth(&self) -> Vec2 { Vec2::new(self.width_growth, self.height_growth) }
}

const GOAL_INITIAL_SIZE: Vec2 = Vec2::new(GOAL_INITIAL_WIDTH, GOAL_INITIAL_HEIGHT);

/// Grows the targeted goal's opening by [`GoalConfig::growth`].
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct GrowGoal {
    pub entity: Entity,
}

/// Snaps the targeted goal's opening back to its starting size.
#[derive(EntityEvent, Debug, Clone, Copy)]
pub struct ResetGoal {
    pub entity: Entity,
}

/// Handles to the nine entities a goal rewrites on every resize, captured when
/// the goal is spawned and never looked up again.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct GoalPieces {
    walls:  [Entity; 4],
    panels: [Entity; 5],
}

impl GoalPieces {
    pub const fn new(walls: [Entity; 4], panels: [Entity; 5]) -> Self { Self { walls, panels } }

    pub const fn wall(&self, kind: WallPieceKind) -> Entity { self.walls[kind.index()] }

    pub const fn panel(&self, kind: PocketPanelKind) -> Entity { self.panels[kind.index()] }
}

/// Shared handles used while spawning both goals
struct GoalAssets {
    cube:            Handle<Mesh>,
    wall_texture:    Handle<Image>,
    pocket_material: Handle<StandardMaterial>,
}

fn spawn_goals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    dims: Res<PlaneDimensions>,
) {
    // tiling only works if the sampler repeats instead of clamping
    let wall_texture =
        asset_server.load_with_settings(WALL_TEXTURE_PATH, |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        });

    let assets = GoalAssets {
        cube: meshes.add(Cuboid::from_length(1.0)),
        wall_texture,
        pocket_material: materials.add(StandardMaterial {
            base_color: POCKET_COLOR,
            perceptual_roughness: ARENA_PERCEPTUAL_ROUGHNESS,
            ..default()
        }),
    };

    for side in GoalSide::ALL {
        let goal = spawn_goal(&mut commands, &mut materials, &assets, side, &dims);
        debug!("spawned {side} goal {goal}");
    }
}

/// Builds one fully wired goal: the opening state, its four wall pieces and
/// its five pocket panels, all positioned from a single geometry solve.
fn spawn_goal(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    assets: &GoalAssets,
    side: GoalSide,
    dims: &PlaneDimensions,
) -> Entity {
    let opening = Opening::new(side, GOAL_INITIAL_SIZE, dims);
    let geometry = opening.geometry(dims);

    let goal = commands
        .spawn((
            Name::new(format!("Goal_{side}")),
            opening,
            Transform::from_translation(pocket_origin(dims, side)),
            Visibility::default(),
        ))
        .id();

    let walls = WallPieceKind::ALL.map(|kind| {
        let material = materials.add(wall_material(
            &assets.wall_texture,
            geometry.textures.get(kind),
        ));
        commands
            .spawn((
                Name::new(format!("Wall_{side}_{kind:?}")),
                GoalWallPiece { goal },
                Mesh3d(assets.cube.clone()),
                MeshMaterial3d(material),
                geometry.walls.get(kind).transform(),
                RigidBody::Static,
                Collider::cuboid(1.0, 1.0, 1.0),
                CollisionLayers::new([GameLayer::Wall], [GameLayer::Ball]),
            ))
            .id()
    });

    let panels = PocketPanelKind::ALL.map(|kind| {
        let layer = if kind == PocketPanelKind::Back {
            GameLayer::Goal
        } else {
            GameLayer::Wall
        };
        let mut panel = commands.spawn((
            Name::new(format!("Goal_{side}_{kind:?}")),
            ChildOf(goal),
            Mesh3d(assets.cube.clone()),
            MeshMaterial3d(assets.pocket_material.clone()),
            geometry.pocket.get(kind).transform(),
            RigidBody::Static,
            Collider::cuboid(1.0, 1.0, 1.0),
            CollisionLayers::new([layer], [GameLayer::Ball]),
        ));
        if kind == PocketPanelKind::Back {
            panel.insert(GoalBackPanel {
                goal,
                scorer: side.scorer(),
            });
        }
        panel.id()
    });

    commands.entity(goal).insert(GoalPieces::new(walls, panels));
    goal
}

/// Each wall piece owns its material so its texture transform can change independently.
fn wall_material(texture: &Handle<Image>, transform: &TextureTransform) -> StandardMaterial {
    StandardMaterial {
        base_color: WALL_BASE_COLOR,
        base_color_texture: Some(texture.clone()),
        uv_transform: transform.uv_transform(),
        perceptual_roughness: ARENA_PERCEPTUAL_ROUGHNESS,
        ..default()
    }
}

pub(crate) fn on_grow_goal(
    grow: On<GrowGoal>,
    config: Res<GoalConfig>,
    dims: Res<PlaneDimensions>,
    mut goals: Query<(&mut Opening, &GoalPieces)>,
    mut writer: PieceWriter,
) {
    let Ok((mut opening, pieces)) = goals.get_mut(grow.entity) else {
        warn!("GrowGoal targeted {} which is not a goal", grow.entity);
        return;
    };

    if !opening.grow(config.growth(), &dims) {
        debug!("{} goal already at full size", opening.side());
    }

    writer.apply(&opening, pieces, &opening.geometry(&dims));
}

pub(crate) fn on_reset_goal(
    reset: On<ResetGoal>,
    dims: Res<PlaneDimensions>,
    mut goals: Query<(&mut Opening, &GoalPieces)>,
    mut writer: PieceWriter,
) {
    let Ok((mut opening, pieces)) = goals.get_mut(reset.entity) else {
        warn!("ResetGoal targeted {} which is not a goal", reset.entity);
        return;
    };

    opening.reset_size();
    writer.apply(&opening, pieces, &opening.geometry(&dims));
}

/// Rewrites a goal's existing pieces in place.
///
/// Materials are optional so a headless app without the asset plugins still
/// gets its transforms updated.
#[derive(SystemParam)]
pub(crate) struct PieceWriter<'w, 's> {
    transforms:      Query<'w, 's, &'static mut Transform, Without<Opening>>,
    piece_materials: Query<'w, 's, &'static MeshMaterial3d<StandardMaterial>>,
    materials:       Option<ResMut<'w, Assets<StandardMaterial>>>,
}

impl PieceWriter<'_, '_> {
    fn apply(&mut self, opening: &Opening, pieces: &GoalPieces, geometry: &OpeningGeometry) {
        let side = opening.side();

        for kind in WallPieceKind::ALL {
            let entity = pieces.wall(kind);
            let Ok(mut transform) = self.transforms.get_mut(entity) else {
                warn!("{side} goal: wall piece {kind:?} ({entity}) is missing, skipping it");
                continue;
            };
            geometry.walls.get(kind).write_to(&mut transform);
            self.write_texture(entity, geometry.textures.get(kind));
        }

        for kind in PocketPanelKind::ALL {
            let entity = pieces.panel(kind);
            let Ok(mut transform) = self.transforms.get_mut(entity) else {
                warn!("{side} goal: pocket panel {kind:?} ({entity}) is missing, skipping it");
                continue;
            };
            geometry.pocket.get(kind).write_to(&mut transform);
        }

        let size = opening.size();
        debug!("{side} goal resized to {:.3} x {:.3}", size.x, size.y);
    }

    fn write_texture(&mut self, entity: Entity, texture: &TextureTransform) {
        let Some(materials) = self.materials.as_deref_mut() else {
            return;
        };
        let Ok(material) = self.piece_materials.get(entity) else {
            return;
        };
        if let Some(mut standard) = materials.get_mut(&material.0) {
            standard.uv_transform = texture.uv_transform();
        }
    }
}
