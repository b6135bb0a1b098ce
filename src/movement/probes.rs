//! Movement domain: grounded probe geometry and planar velocity math.

use bevy::prelude::*;

/// Origins of the five downward probes: the center, then the four footprint
/// corners pulled in by `inset`.
pub fn probe_origins(center: Vec3, half_extent: f32, inset: f32) -> [Vec3; 5] {
    let e = (half_extent - inset).max(0.0);
    [
        center,
        center + Vec3::new(e, 0.0, e),
        center + Vec3::new(-e, 0.0, e),
        center + Vec3::new(e, 0.0, -e),
        center + Vec3::new(-e, 0.0, -e),
    ]
}

/// Grounded iff the body is not moving vertically and any probe hits.
/// Probes are only cast while the speed test passes.
pub fn is_grounded(
    vertical_speed: f32,
    speed_epsilon: f32,
    origins: &[Vec3],
    mut probe_hits: impl FnMut(Vec3) -> bool,
) -> bool {
    vertical_speed.abs() < speed_epsilon && origins.iter().any(|&origin| probe_hits(origin))
}

/// Planar velocity and facing for a movement axis.
///
/// Inside the dead zone the body stops horizontally and keeps its facing.
/// Outside it moves at `speed` along the axis direction regardless of the
/// axis magnitude. Vertical velocity is always preserved.
pub fn planar_velocity(
    axis: Vec2,
    speed: f32,
    dead_zone: f32,
    vertical: f32,
) -> (Vec3, Option<Dir3>) {
    if axis.x.abs() + axis.y.abs() <= dead_zone {
        return (Vec3::new(0.0, vertical, 0.0), None);
    }

    // Forward on the stick is -Z in world space
    let Ok(direction) = Dir3::new(Vec3::new(axis.x, 0.0, -axis.y)) else {
        return (Vec3::new(0.0, vertical, 0.0), None);
    };

    let planar = direction.as_vec3() * speed;
    (Vec3::new(planar.x, vertical, planar.z), Some(direction))
}
