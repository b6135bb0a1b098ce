//! Movement domain: tests for grounded probes and planar velocity.

use bevy::prelude::*;

use super::{EntityKind, PlayerTuning, is_grounded, planar_velocity, probe_origins};

const EPSILON: f32 = 1e-5;

#[test]
fn test_probe_origins_center_and_inset_corners() {
    let center = Vec3::new(1.0, 2.0, 3.0);
    let origins = probe_origins(center, 0.5, 0.02);

    assert_eq!(origins[0], center);
    for corner in &origins[1..] {
        let offset = *corner - center;
        assert!((offset.x.abs() - 0.48).abs() < EPSILON);
        assert!((offset.z.abs() - 0.48).abs() < EPSILON);
        assert_eq!(offset.y, 0.0);
    }

    // All four corners are distinct
    for i in 1..5 {
        for j in (i + 1)..5 {
            assert_ne!(origins[i], origins[j]);
        }
    }
}

#[test]
fn test_probe_origins_collapse_when_inset_exceeds_extent() {
    let origins = probe_origins(Vec3::ZERO, 0.01, 0.02);
    assert!(origins.iter().all(|o| *o == Vec3::ZERO));
}

#[test]
fn test_grounded_needs_a_hit() {
    let origins = probe_origins(Vec3::ZERO, 0.5, 0.02);
    assert!(!is_grounded(0.0, 0.05, &origins, |_| false));
    assert!(is_grounded(0.0, 0.05, &origins, |_| true));
}

#[test]
fn test_grounded_with_single_corner_hit() {
    let origins = probe_origins(Vec3::ZERO, 0.5, 0.02);
    let corner = origins[4];
    assert!(is_grounded(0.01, 0.05, &origins, |o| o == corner));
}

#[test]
fn test_not_grounded_while_moving_vertically() {
    let origins = probe_origins(Vec3::ZERO, 0.5, 0.02);
    let mut probes = 0;
    assert!(!is_grounded(-0.2, 0.05, &origins, |_| {
        probes += 1;
        true
    }));
    assert_eq!(probes, 0);
    assert!(!is_grounded(0.05, 0.05, &origins, |_| true));
}

#[test]
fn test_dead_zone_stops_planar_motion() {
    let (velocity, facing) = planar_velocity(Vec2::new(0.05, 0.05), 6.0, 0.1, -3.0);
    assert_eq!(velocity, Vec3::new(0.0, -3.0, 0.0));
    assert!(facing.is_none());
}

#[test]
fn test_forward_input_moves_along_negative_z() {
    let (velocity, facing) = planar_velocity(Vec2::Y, 6.0, 0.1, 1.5);
    assert!((velocity - Vec3::new(0.0, 1.5, -6.0)).length() < EPSILON);
    assert_eq!(facing, Some(Dir3::NEG_Z));
}

#[test]
fn test_diagonal_input_moves_at_full_speed() {
    let (velocity, facing) = planar_velocity(Vec2::new(1.0, 1.0), 6.0, 0.1, 0.0);
    let planar = Vec2::new(velocity.x, velocity.z);
    assert!((planar.length() - 6.0).abs() < EPSILON);
    assert!(velocity.x > 0.0 && velocity.z < 0.0);
    assert!(facing.is_some());
}

#[test]
fn test_probe_distance_reaches_past_feet() {
    let tuning = PlayerTuning::default();
    assert!((tuning.half_extent() - 0.5).abs() < EPSILON);
    assert!((tuning.probe_distance() - 0.7).abs() < EPSILON);
}

#[test]
fn test_only_bodies_press_buttons() {
    assert!(EntityKind::Player.presses_buttons());
    assert!(EntityKind::Corpse.presses_buttons());
    assert!(!EntityKind::Scenery.presses_buttons());
    assert!(!EntityKind::Collectible.presses_buttons());
}
