//! Levels domain: tests for hazard tiling and target lookup.

use bevy::prelude::*;
use std::collections::HashMap;

use super::layout::{color_or, hazard_collider_size, hazard_tile_offsets, resolve_targets};

#[test]
fn test_single_tile_sits_at_center() {
    assert_eq!(hazard_tile_offsets(1, 1, Vec3::ONE), vec![Vec3::ZERO]);
}

#[test]
fn test_hazard_grid_is_centered() {
    let offsets = hazard_tile_offsets(3, 2, Vec3::new(2.0, 0.5, 1.0));
    assert_eq!(offsets.len(), 6);

    let xs: Vec<f32> = offsets.iter().map(|o| o.x).collect();
    let zs: Vec<f32> = offsets.iter().map(|o| o.z).collect();
    for x in [-2.0, 0.0, 2.0] {
        assert_eq!(xs.iter().filter(|&&v| v == x).count(), 2);
    }
    for z in [-0.5, 0.5] {
        assert_eq!(zs.iter().filter(|&&v| v == z).count(), 3);
    }
    assert!(offsets.iter().all(|o| o.y == 0.0));

    let sum: Vec3 = offsets.iter().copied().sum();
    assert_eq!(sum, Vec3::ZERO);
}

#[test]
fn test_empty_hazard_grid() {
    assert!(hazard_tile_offsets(0, 4, Vec3::ONE).is_empty());
}

#[test]
fn test_hazard_collider_covers_grid() {
    let size = hazard_collider_size(3, 2, Vec3::new(2.0, 0.5, 1.0));
    assert_eq!(size, Vec3::new(6.0, 0.5, 2.0));
}

#[test]
fn test_resolve_targets_splits_missing_ids() {
    let lift = Entity::from_bits(10);
    let gate = Entity::from_bits(11);
    let panners = HashMap::from([("lift".to_string(), lift), ("gate".to_string(), gate)]);

    let names = vec!["gate".to_string(), "nope".to_string(), "lift".to_string()];
    let (resolved, missing) = resolve_targets(&names, &panners);

    assert_eq!(resolved, vec![gate, lift]);
    assert_eq!(missing, vec!["nope".to_string()]);
}

#[test]
fn test_color_or_prefers_level_color() {
    let fallback = Color::srgb(0.1, 0.1, 0.1);
    assert_eq!(color_or(None, fallback), fallback);
    assert_eq!(
        color_or(Some([0.2, 0.4, 0.6]), fallback),
        Color::srgb(0.2, 0.4, 0.6)
    );
}
