//! Levels domain: pure layout helpers for hazard grids and target lookup.

use bevy::prelude::*;
use std::collections::HashMap;

/// Offsets of each tile of a `width x height` hazard grid from its center.
pub fn hazard_tile_offsets(width: u32, height: u32, tile_size: Vec3) -> Vec<Vec3> {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;

    let mut offsets = Vec::with_capacity((width * height) as usize);
    for i in 0..width {
        for j in 0..height {
            offsets.push(Vec3::new(
                tile_size.x * (-half_w + 0.5 + i as f32),
                0.0,
                tile_size.z * (-half_h + 0.5 + j as f32),
            ));
        }
    }
    offsets
}

/// Size of the collider covering a whole hazard grid.
pub fn hazard_collider_size(width: u32, height: u32, tile_size: Vec3) -> Vec3 {
    Vec3::new(
        tile_size.x * width as f32,
        tile_size.y,
        tile_size.z * height as f32,
    )
}

/// Map panner ids to spawned entities. Unknown ids are returned separately.
pub fn resolve_targets(
    names: &[String],
    panners: &HashMap<String, Entity>,
) -> (Vec<Entity>, Vec<String>) {
    let mut resolved = Vec::with_capacity(names.len());
    let mut missing = Vec::new();
    for name in names {
        match panners.get(name) {
            Some(&entity) => resolved.push(entity),
            None => missing.push(name.clone()),
        }
    }
    (resolved, missing)
}

pub fn color_or(color: Option<[f32; 3]>, fallback: Color) -> Color {
    color
        .map(|[r, g, b]| Color::srgb(r, g, b))
        .unwrap_or(fallback)
}
