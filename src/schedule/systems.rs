//! Schedule domain: systems that drive and apply deferred actions.

use bevy::prelude::*;

use crate::lifecycle::PlayerLife;
use crate::schedule::queue::{DeferredAction, DeferredQueue};

pub(crate) fn run_deferred_actions(
    time: Res<Time>,
    mut commands: Commands,
    mut queue: ResMut<DeferredQueue>,
    mut players: Query<&mut PlayerLife>,
) {
    for action in queue.advance(time.delta()) {
        apply_action(action, &mut commands, &mut players);
    }
}

/// Run every pending action immediately; used when a level is torn down.
pub(crate) fn flush_deferred_actions(
    mut commands: Commands,
    mut queue: ResMut<DeferredQueue>,
    mut players: Query<&mut PlayerLife>,
) {
    let pending = queue.flush();
    if !pending.is_empty() {
        debug!("Flushing {} deferred actions", pending.len());
    }
    for action in pending {
        apply_action(action, &mut commands, &mut players);
    }
}

fn apply_action(
    action: DeferredAction,
    commands: &mut Commands,
    players: &mut Query<&mut PlayerLife>,
) {
    match action {
        DeferredAction::RearmGroundCheck { player } => {
            if let Ok(mut life) = players.get_mut(player) {
                life.rearm_ground_check();
            }
        }
        DeferredAction::DespawnCorpse { corpse } => {
            if let Ok(mut entity) = commands.get_entity(corpse) {
                entity.despawn();
            }
        }
    }
}
