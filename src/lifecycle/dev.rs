//! Lifecycle domain: debug hotkeys for inspecting and nudging player state.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::{CurrentLevel, LoadLevelEvent};
use crate::lifecycle::components::{CorpseTrail, PlayerLife};
use crate::movement::Player;

/// F1 logs state, F2 grants a key, F3 refills the timer, F4 warps to the next level.
pub(crate) fn debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    registry: Option<Res<ContentRegistry>>,
    current_level: Res<CurrentLevel>,
    mut players: Query<(&mut PlayerLife, &CorpseTrail), With<Player>>,
    mut load_level: MessageWriter<LoadLevelEvent>,
) {
    for (mut life, trail) in &mut players {
        if keyboard.just_pressed(KeyCode::F1) {
            info!("[DEBUG] {:?}, corpses on trail: {}", *life, trail.len());
        }
        if keyboard.just_pressed(KeyCode::F2) {
            life.keys += 1;
            info!("[DEBUG] Granted key, now {}", life.keys);
        }
        if keyboard.just_pressed(KeyCode::F3) {
            life.refill_timer();
            info!("[DEBUG] Timer refilled to {:.2}", life.timer);
        }
    }

    if keyboard.just_pressed(KeyCode::F4) {
        let next = registry
            .as_ref()
            .zip(current_level.id())
            .and_then(|(registry, id)| registry.level_after(id));
        if let Some(next) = next {
            info!("[DEBUG] Warping to level '{}'", next);
            load_level.write(LoadLevelEvent {
                level_id: next.to_string(),
            });
        }
    }
}
