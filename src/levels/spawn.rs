//! Levels domain: building a level's entities from its definition.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{
    CollectibleKind, ContentRegistry, HazardDef, HazardKind, LevelDef, builtin_level,
};
use crate::core::CurrentLevel;
use crate::interactables::{
    ButtonSwitch, Collectible, Door, Hazard, HazardScroll, LevelGoal, Panner, ReportsStay,
    SpawnPoint, Spin,
};
use crate::levels::components::{HazardTile, LevelEntity};
use crate::levels::layout::{color_or, hazard_collider_size, hazard_tile_offsets, resolve_targets};
use crate::lifecycle::{BodyColor, BodyMesh, ColorRng, CorpseTrail, PlayerLife};
use crate::movement::{EntityKind, GameLayer, Player, PlayerTuning};

const PLATFORM_COLOR: Color = Color::srgb(0.45, 0.47, 0.5);
const PANNER_COLOR: Color = Color::srgb(0.55, 0.45, 0.3);
const DOOR_COLOR: Color = Color::srgb(0.5, 0.3, 0.2);
const SPAWN_COLOR: Color = Color::srgb(0.3, 0.6, 0.9);
const BUTTON_COLOR: Color = Color::srgb(0.85, 0.2, 0.2);
const GOAL_COLOR: Color = Color::srgb(0.95, 0.8, 0.2);

fn ground_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Corpse])
}

fn sensor_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player, GameLayer::Corpse])
}

fn collectible_color(kind: CollectibleKind) -> Color {
    match kind {
        CollectibleKind::Corpse => Color::srgb(0.7, 0.7, 0.75),
        CollectibleKind::Stopwatch => Color::srgb(0.3, 0.85, 0.4),
        CollectibleKind::Jump => Color::srgb(0.3, 0.5, 0.95),
        CollectibleKind::Key => Color::srgb(0.95, 0.85, 0.25),
        CollectibleKind::Event => Color::srgb(0.8, 0.4, 0.9),
    }
}

fn hazard_color(kind: HazardKind) -> Color {
    match kind {
        HazardKind::Lava => Color::srgb(0.95, 0.35, 0.05),
        HazardKind::Spikes => Color::srgb(0.6, 0.6, 0.65),
    }
}

/// Spawn the level named by `CurrentLevel`, falling back to the built-in level.
pub(crate) fn spawn_current_level(
    mut commands: Commands,
    current_level: Res<CurrentLevel>,
    registry: Option<Res<ContentRegistry>>,
    tuning: Res<PlayerTuning>,
    body_mesh: Res<BodyMesh>,
    mut color_rng: ResMut<ColorRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let found = registry
        .as_ref()
        .zip(current_level.id())
        .and_then(|(registry, id)| registry.level(id).cloned());
    let level = match found {
        Some(level) => level,
        None => {
            error!(
                "Level {:?} not found in ContentRegistry, spawning built-in level",
                current_level.id()
            );
            builtin_level()
        }
    };

    info!(
        "Spawning level '{}' ({}), level #{} this session",
        level.id, level.name, current_level.levels_entered
    );

    let panners = spawn_panners(&mut commands, &level, &mut meshes, &mut materials);
    let targets_for = |names: &[String], source: &str| {
        let (resolved, missing) = resolve_targets(names, &panners);
        for name in missing {
            warn!("{} in level '{}' targets unknown panner '{}'", source, level.id, name);
        }
        resolved
    };

    spawn_platforms(&mut commands, &level, &mut meshes, &mut materials);

    let mut first_spawn_point = None;
    for def in &level.spawn_points {
        let size = Vec3::from_array(def.size);
        let entity = commands
            .spawn((
                (SpawnPoint, ReportsStay, EntityKind::SpawnPoint, LevelEntity),
                (
                    Mesh3d(meshes.add(Cuboid::from_size(size))),
                    MeshMaterial3d(materials.add(SPAWN_COLOR)),
                    Transform::from_translation(Vec3::from_array(def.position)),
                ),
                (
                    Collider::cuboid(size.x, size.y, size.z),
                    Sensor,
                    CollidingEntities::default(),
                    sensor_layers(),
                ),
            ))
            .id();
        if first_spawn_point.is_none() {
            first_spawn_point = Some(entity);
        }
    }

    for def in &level.collectibles {
        let color = if def.random_color {
            color_rng.next_color()
        } else {
            collectible_color(def.kind)
        };
        commands.spawn((
            (
                Collectible {
                    kind: def.kind,
                    amount: def.amount,
                    targets: targets_for(&def.targets, "Collectible"),
                },
                Spin {
                    degrees_per_sec: def.rotation_speed,
                },
                EntityKind::Collectible,
                LevelEntity,
            ),
            (
                Mesh3d(meshes.add(Cuboid::from_length(0.5))),
                MeshMaterial3d(materials.add(color)),
                Transform::from_translation(Vec3::from_array(def.position)),
            ),
            (Collider::cuboid(0.6, 0.6, 0.6), Sensor, sensor_layers()),
        ));
    }

    for def in &level.buttons {
        let size = Vec3::from_array(def.size);
        commands.spawn((
            (
                ButtonSwitch::new(targets_for(&def.targets, "Button")),
                ReportsStay,
                EntityKind::Button,
                LevelEntity,
            ),
            (
                Mesh3d(meshes.add(Cuboid::from_size(size))),
                MeshMaterial3d(materials.add(BUTTON_COLOR)),
                Transform::from_translation(Vec3::from_array(def.position)),
            ),
            (
                Collider::cuboid(size.x, size.y, size.z),
                Sensor,
                CollidingEntities::default(),
                sensor_layers(),
            ),
        ));
    }

    for def in &level.doors {
        let size = Vec3::from_array(def.size);
        commands.spawn((
            (
                Door::new(targets_for(&def.targets, "Door")),
                EntityKind::Door,
                LevelEntity,
            ),
            (
                Mesh3d(meshes.add(Cuboid::from_size(size))),
                MeshMaterial3d(materials.add(DOOR_COLOR)),
                Transform::from_translation(Vec3::from_array(def.position)),
            ),
            (
                RigidBody::Static,
                Collider::cuboid(size.x, size.y, size.z),
                ground_layers(),
            ),
        ));
    }

    for def in &level.hazards {
        spawn_hazard(&mut commands, def, &mut meshes, &mut materials);
    }

    if let Some(goal) = &level.goal {
        commands.spawn((
            (
                LevelGoal {
                    next_level: goal.next_level.clone(),
                    reached: false,
                },
                Spin {
                    degrees_per_sec: goal.rotation_speed,
                },
                EntityKind::Goal,
                LevelEntity,
            ),
            (
                Mesh3d(meshes.add(Cone::new(0.6, 1.0).mesh().resolution(4))),
                MeshMaterial3d(materials.add(GOAL_COLOR)),
                Transform::from_translation(Vec3::from_array(goal.position)),
            ),
            (Collider::cuboid(1.0, 1.0, 1.0), Sensor, sensor_layers()),
        ));
    }

    spawn_player(
        &mut commands,
        &level,
        first_spawn_point,
        &tuning,
        &body_mesh,
        &mut color_rng,
        &mut materials,
    );
}

fn spawn_platforms(
    commands: &mut Commands,
    level: &LevelDef,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    for def in &level.platforms {
        let size = Vec3::from_array(def.size);
        commands.spawn((
            (EntityKind::Scenery, LevelEntity),
            (
                Mesh3d(meshes.add(Cuboid::from_size(size))),
                MeshMaterial3d(materials.add(color_or(def.color, PLATFORM_COLOR))),
                Transform::from_translation(Vec3::from_array(def.position)),
            ),
            (
                RigidBody::Static,
                Collider::cuboid(size.x, size.y, size.z),
                ground_layers(),
            ),
        ));
    }
}

/// Spawn every panner and return them by id for target lookup.
fn spawn_panners(
    commands: &mut Commands,
    level: &LevelDef,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> HashMap<String, Entity> {
    let mut panners = HashMap::new();
    for def in &level.panners {
        let size = Vec3::from_array(def.size);
        let start = Vec3::from_array(def.position);
        let entity = commands
            .spawn((
                (
                    Panner::new(
                        start,
                        Vec3::from_array(def.offset),
                        def.move_speed,
                        def.active_cost,
                    ),
                    EntityKind::Panner,
                    LevelEntity,
                ),
                (
                    Mesh3d(meshes.add(Cuboid::from_size(size))),
                    MeshMaterial3d(materials.add(color_or(def.color, PANNER_COLOR))),
                    Transform::from_translation(start),
                ),
                (
                    RigidBody::Kinematic,
                    Collider::cuboid(size.x, size.y, size.z),
                    ground_layers(),
                ),
            ))
            .id();
        if panners.insert(def.id.clone(), entity).is_some() {
            warn!("Duplicate panner id '{}' in level '{}'", def.id, level.id);
        }
    }
    panners
}

fn spawn_hazard(
    commands: &mut Commands,
    def: &HazardDef,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let tile_size = Vec3::from_array(def.tile_size);
    let collider_size = hazard_collider_size(def.width, def.height, tile_size);
    let tile_mesh = meshes.add(Cuboid::from_size(tile_size));
    // Shared by every tile so one scroll moves the whole grid
    let material = materials.add(hazard_color(def.kind));

    let mut hazard = commands.spawn((
        (Hazard { kind: def.kind }, EntityKind::Hazard, LevelEntity),
        Transform::from_translation(Vec3::from_array(def.position)),
        Visibility::default(),
        (
            RigidBody::Static,
            Collider::cuboid(collider_size.x, collider_size.y, collider_size.z),
            ground_layers(),
        ),
    ));

    if let Some([x, y]) = def.scroll {
        hazard.insert(HazardScroll::new(Vec2::new(x, y), material.clone()));
    }

    hazard.with_children(|parent| {
        for offset in hazard_tile_offsets(def.width, def.height, tile_size) {
            parent.spawn((
                HazardTile,
                Mesh3d(tile_mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(offset),
            ));
        }
    });
}

fn spawn_player(
    commands: &mut Commands,
    level: &LevelDef,
    spawn_point: Option<Entity>,
    tuning: &PlayerTuning,
    body_mesh: &BodyMesh,
    color_rng: &mut ColorRng,
    materials: &mut Assets<StandardMaterial>,
) {
    let level_start = Vec3::from_array(level.start);
    let position = level
        .spawn_points
        .first()
        .map(|spawn| Vec3::from_array(spawn.position) + Vec3::Y)
        .unwrap_or(level_start);

    let mut life = PlayerLife::new(tuning, &level.player, level_start);
    life.spawn_point = spawn_point;
    let color = color_rng.next_color();

    info!(
        "Spawning player at {:?}: timer={:.2}, jumps={}, corpse_limit={}",
        position, life.respawn_time, life.jump_count, life.corpse_limit
    );

    commands.spawn((
        // Identity & life
        (
            Player,
            EntityKind::Player,
            life,
            CorpseTrail::default(),
            BodyColor(color),
            LevelEntity,
        ),
        // Rendering
        (
            Mesh3d(body_mesh.0.clone()),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(position).with_scale(Vec3::splat(tuning.player_size)),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::cuboid(1.0, 1.0, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Corpse, GameLayer::Sensor],
            ),
        ),
    ));
}
