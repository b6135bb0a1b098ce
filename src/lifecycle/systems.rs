//! Lifecycle domain: countdown timers and fake deaths.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::interactables::SpawnPoint;
use crate::levels::LevelEntity;
use crate::lifecycle::components::{BodyColor, Corpse, CorpseTrail, PlayerLife, TimerTick};
use crate::lifecycle::events::{DeathCause, PlayerDiedEvent};
use crate::lifecycle::resources::{BodyMesh, ColorRng};
use crate::movement::{EntityKind, GameLayer, Player, PlayerInput, PlayerTuning};
use crate::schedule::{DeferredAction, DeferredQueue};

pub(crate) fn setup_body_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(BodyMesh(meshes.add(Cuboid::from_length(1.0))));
}

pub(crate) fn tick_life_timers(
    time: Res<Time>,
    input: Res<PlayerInput>,
    mut query: Query<(Entity, &mut PlayerLife), With<Player>>,
    mut deaths: MessageWriter<PlayerDiedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut life) in &mut query {
        match life.tick(dt) {
            TimerTick::Expired => {
                deaths.write(PlayerDiedEvent {
                    player: entity,
                    cause: DeathCause::Timeout,
                });
            }
            TimerTick::Running if input.force_death_just_pressed => {
                deaths.write(PlayerDiedEvent {
                    player: entity,
                    cause: DeathCause::Forced,
                });
            }
            TimerTick::Running | TimerTick::Paused => {}
        }
    }
}

/// Respawn each player that died this frame and extend its corpse trail.
pub(crate) fn apply_fake_deaths(
    mut commands: Commands,
    mut events: MessageReader<PlayerDiedEvent>,
    tuning: Res<PlayerTuning>,
    body_mesh: Res<BodyMesh>,
    mut queue: ResMut<DeferredQueue>,
    mut color_rng: ResMut<ColorRng>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    spawn_points: Query<&GlobalTransform, With<SpawnPoint>>,
    mut players: Query<
        (
            &mut PlayerLife,
            &mut CorpseTrail,
            &mut BodyColor,
            &mut Transform,
            &mut LinearVelocity,
            &mut MeshMaterial3d<StandardMaterial>,
        ),
        With<Player>,
    >,
) {
    let mut handled = HashSet::new();

    for event in events.read() {
        if handled.contains(&event.player) {
            continue;
        }
        let Ok((mut life, mut trail, mut body_color, mut transform, mut velocity, mut material)) =
            players.get_mut(event.player)
        else {
            continue;
        };
        handled.insert(event.player);

        let death_position = transform.translation;
        let respawn_position = life
            .spawn_point
            .and_then(|spawn| spawn_points.get(spawn).ok())
            .map(|spawn| spawn.translation())
            .unwrap_or(life.level_start)
            + Vec3::Y;

        life.refill_timer();
        transform.translation = respawn_position;
        transform.rotation = Quat::IDENTITY;
        velocity.0 = Vec3::ZERO;

        let corpse = spawn_corpse(
            &mut commands,
            &body_mesh,
            &mut materials,
            &tuning,
            death_position,
            body_color.0,
        );

        body_color.0 = color_rng.next_color();
        material.0 = materials.add(body_color.0);

        let evicted = trail.push(corpse, life.corpse_limit);
        for old in &evicted {
            // Move it out of the world now so triggers see it leave, despawn shortly after.
            // Goes through commands since it may be the corpse spawned just above.
            commands.entity(*old).insert(
                Transform::from_translation(tuning.corpse_stash)
                    .with_scale(Vec3::splat(tuning.player_size)),
            );
            queue.schedule_secs(
                tuning.corpse_despawn_delay,
                DeferredAction::DespawnCorpse { corpse: *old },
            );
            debug!("Evicted corpse {:?}", old);
        }

        info!(
            "Fake death ({:?}) at {:?}: respawned at {:?}, corpses {}/{}",
            event.cause,
            death_position,
            respawn_position,
            trail.len(),
            life.corpse_limit
        );
    }
}

fn spawn_corpse(
    commands: &mut Commands,
    body_mesh: &BodyMesh,
    materials: &mut Assets<StandardMaterial>,
    tuning: &PlayerTuning,
    position: Vec3,
    color: Color,
) -> Entity {
    let size = tuning.player_size;
    commands
        .spawn((
            (Corpse, EntityKind::Corpse, LevelEntity),
            // Rendering
            (
                Mesh3d(body_mesh.0.clone()),
                MeshMaterial3d(materials.add(color)),
                Transform::from_translation(position).with_scale(Vec3::splat(size)),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::cuboid(1.0, 1.0, 1.0),
                LockedAxes::ROTATION_LOCKED,
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Corpse,
                    [
                        GameLayer::Ground,
                        GameLayer::Player,
                        GameLayer::Corpse,
                        GameLayer::Sensor,
                    ],
                ),
            ),
        ))
        .id()
}
