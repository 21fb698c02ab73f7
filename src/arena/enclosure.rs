use avian3d::prelude::*;
use bevy::prelude::*;

use super::constants::ARENA_HALF_DEPTH;
use super::constants::ARENA_PERCEPTUAL_ROUGHNESS;
use super::constants::ENCLOSURE_COLOR;
use super::dimensions::PlaneDimensions;
use super::layout::PieceGeometry;
use crate::physics::GameLayer;

pub struct EnclosurePlugin;

impl Plugin for EnclosurePlugin {
    fn build(&self, app: &mut App) { app.add_systems(Startup, spawn_enclosure); }
}

/// The four arena surfaces that are not goal walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum EnclosureFace {
    Floor,
    Ceiling,
    East,
    West,
}

impl EnclosureFace {
    pub const ALL: [Self; 4] = [Self::Floor, Self::Ceiling, Self::East, Self::West];

    /// Slab just outside the arena volume, long enough in z to meet both goal walls' outer faces.
    pub fn geometry(self, dims: &PlaneDimensions) -> PieceGeometry {
        let thickness = dims.wall_thickness;
        let depth = 2.0f32.mul_add(ARENA_HALF_DEPTH, thickness);
        let outside_x = (dims.width + thickness) / 2.0;

        match self {
            Self::Floor => PieceGeometry::new(
                Vec3::new(0.0, -thickness / 2.0, 0.0),
                Vec3::new(2.0f32.mul_add(thickness, dims.width), thickness, depth),
            ),
            Self::Ceiling => PieceGeometry::new(
                Vec3::new(0.0, dims.height + thickness / 2.0, 0.0),
                Vec3::new(2.0f32.mul_add(thickness, dims.width), thickness, depth),
            ),
            Self::East => PieceGeometry::new(
                Vec3::new(outside_x, dims.center_y(), 0.0),
                Vec3::new(thickness, dims.height, depth),
            ),
            Self::West => PieceGeometry::new(
                Vec3::new(-outside_x, dims.center_y(), 0.0),
                Vec3::new(thickness, dims.height, depth),
            ),
        }
    }
}

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Enclosure(pub EnclosureFace);

fn spawn_enclosure(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    dims: Res<PlaneDimensions>,
) {
    let cube = meshes.add(Cuboid::from_length(1.0));
    let material = materials.add(StandardMaterial {
        base_color: ENCLOSURE_COLOR,
        perceptual_roughness: ARENA_PERCEPTUAL_ROUGHNESS,
        ..default()
    });

    for face in EnclosureFace::ALL {
        commands.spawn((
            Name::new(format!("Enclosure_{face:?}")),
            Enclosure(face),
            Mesh3d(cube.clone()),
            MeshMaterial3d(material.clone()),
            face.geometry(&dims).transform(),
            RigidBody::Static,
            Collider::cuboid(1.0, 1.0, 1.0),
            CollisionLayers::new([GameLayer::Wall], [GameLayer::Ball]),
        ));
    }
}
