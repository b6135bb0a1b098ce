//! Movement domain: multi-ray ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::lifecycle::{LifePhase, PlayerLife};
use crate::movement::probes::{is_grounded, probe_origins};
use crate::movement::{GameLayer, Player, PlayerTuning};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &LinearVelocity, &mut PlayerLife), With<Player>>,
) {
    // Corpses count as ground so the player can climb on them
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Corpse]);
    let distance = tuning.probe_distance();

    for (transform, velocity, mut life) in &mut query {
        let origins = probe_origins(
            transform.translation,
            tuning.half_extent(),
            tuning.probe_inset,
        );

        let grounded = is_grounded(
            velocity.y,
            tuning.grounded_speed_epsilon,
            &origins,
            |origin| {
                spatial_query
                    .cast_ray(origin, Dir3::NEG_Y, distance, true, &ground_filter)
                    .is_some()
            },
        );

        let phase = if grounded {
            LifePhase::Grounded
        } else {
            LifePhase::Airborne
        };
        if phase != life.phase {
            debug!("Phase {:?} -> {:?}", life.phase, phase);
            life.phase = phase;
        }

        if grounded && life.land() {
            debug!("Landed: jump charges refilled to {}", life.available_jumps);
        }
    }
}
