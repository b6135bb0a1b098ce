//! Lifecycle domain: shared assets and the body color generator.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest value of any color channel, so bodies never render near-black
pub const MIN_COLOR_CHANNEL: f32 = 0.2;

/// Random source for body colors. Seeded from gameplay defaults when set.
#[derive(Resource, Debug)]
pub struct ColorRng(pub ChaCha8Rng);

impl Default for ColorRng {
    fn default() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl ColorRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn next_color(&mut self) -> Color {
        random_body_color(&mut self.0)
    }
}

/// A color with every channel in [MIN_COLOR_CHANNEL, 1.0).
pub fn random_body_color(rng: &mut impl Rng) -> Color {
    Color::srgb(
        rng.random_range(MIN_COLOR_CHANNEL..1.0),
        rng.random_range(MIN_COLOR_CHANNEL..1.0),
        rng.random_range(MIN_COLOR_CHANNEL..1.0),
    )
}

/// Mesh shared by the player body and every corpse
#[derive(Resource, Debug)]
pub struct BodyMesh(pub Handle<Mesh>);
