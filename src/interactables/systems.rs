//! Interactables domain: contact handlers and per-frame animation.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::math::Affine2;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::content::CollectibleKind;
use crate::core::LoadLevelEvent;
use crate::interactables::components::{
    ButtonSwitch, Collectible, Door, Hazard, HazardScroll, LevelGoal, Panner, SpawnPoint, Spin,
};
use crate::interactables::events::{
    Activation, ActivationSignal, ContactPhase, TriggerContact,
};
use crate::lifecycle::{DeathCause, PlayerDiedEvent, PlayerLife};
use crate::movement::EntityKind;

fn signal_targets(
    signals: &mut MessageWriter<ActivationSignal>,
    targets: &[Entity],
    activation: Activation,
) {
    for &target in targets {
        signals.write(ActivationSignal { target, activation });
    }
}

pub(crate) fn handle_collectible_pickups(
    mut commands: Commands,
    mut contacts: MessageReader<TriggerContact>,
    collectibles: Query<&Collectible>,
    mut players: Query<&mut PlayerLife>,
    mut signals: MessageWriter<ActivationSignal>,
) {
    let mut consumed = HashSet::new();

    for contact in contacts.read() {
        if contact.phase != ContactPhase::Enter || contact.other_kind != EntityKind::Player {
            continue;
        }
        let Ok(collectible) = collectibles.get(contact.source) else {
            continue;
        };
        // Despawn is deferred, so guard against a second contact this frame
        if !consumed.insert(contact.source) {
            continue;
        }
        let Ok(mut life) = players.get_mut(contact.other) else {
            continue;
        };

        let effect = life.apply_pickup(collectible.kind, collectible.amount);
        if collectible.kind == CollectibleKind::Event {
            signal_targets(&mut signals, &collectible.targets, Activation::Activate);
        }

        info!(
            "Collected {:?} (amount {}): {:?}",
            collectible.kind, collectible.amount, effect
        );
        debug!("Sound cue: item");
        commands.entity(contact.source).despawn();
    }
}

pub(crate) fn handle_buttons(
    mut contacts: MessageReader<TriggerContact>,
    mut buttons: Query<&mut ButtonSwitch>,
    mut signals: MessageWriter<ActivationSignal>,
) {
    for contact in contacts.read() {
        let Ok(mut button) = buttons.get_mut(contact.source) else {
            continue;
        };

        let activation = match contact.phase {
            ContactPhase::Enter | ContactPhase::Stay => button.press(contact.other_kind),
            ContactPhase::Exit => button.release(contact.other_kind),
        };

        if let Some(activation) = activation {
            debug!(
                "Button {:?} {:?} by {:?}",
                contact.source, activation, contact.other_kind
            );
            signal_targets(&mut signals, &button.targets, activation);
        }
    }
}

pub(crate) fn handle_doors(
    mut contacts: MessageReader<TriggerContact>,
    mut doors: Query<&mut Door>,
    mut players: Query<&mut PlayerLife>,
    mut signals: MessageWriter<ActivationSignal>,
) {
    for contact in contacts.read() {
        if contact.phase != ContactPhase::Enter || contact.other_kind != EntityKind::Player {
            continue;
        }
        let Ok(mut door) = doors.get_mut(contact.source) else {
            continue;
        };
        let Ok(mut life) = players.get_mut(contact.other) else {
            continue;
        };

        if door.try_open(&mut life) {
            info!("Door {:?} opened, {} keys left", contact.source, life.keys);
            signal_targets(&mut signals, &door.targets, Activation::Activate);
        }
    }
}

pub(crate) fn handle_spawn_points(
    mut contacts: MessageReader<TriggerContact>,
    spawn_points: Query<(), With<SpawnPoint>>,
    mut players: Query<&mut PlayerLife>,
) {
    for contact in contacts.read() {
        if contact.other_kind != EntityKind::Player || spawn_points.get(contact.source).is_err() {
            continue;
        }
        let Ok(mut life) = players.get_mut(contact.other) else {
            continue;
        };

        match contact.phase {
            ContactPhase::Enter => {
                if life.spawn_point != Some(contact.source) {
                    info!("Spawn point bound to {:?}", contact.source);
                }
                life.rest_at_spawn(contact.source);
            }
            ContactPhase::Stay => life.hold_at_spawn(),
            ContactPhase::Exit => life.leave_spawn(),
        }
    }
}

pub(crate) fn handle_hazards(
    mut contacts: MessageReader<TriggerContact>,
    hazards: Query<&Hazard>,
    mut deaths: MessageWriter<PlayerDiedEvent>,
) {
    for contact in contacts.read() {
        if contact.phase != ContactPhase::Enter || contact.other_kind != EntityKind::Player {
            continue;
        }
        let Ok(hazard) = hazards.get(contact.source) else {
            continue;
        };

        debug!("Player touched {:?} hazard", hazard.kind);
        deaths.write(PlayerDiedEvent {
            player: contact.other,
            cause: DeathCause::Hazard,
        });
    }
}

pub(crate) fn handle_level_goal(
    mut contacts: MessageReader<TriggerContact>,
    mut goals: Query<&mut LevelGoal>,
    mut load_level: MessageWriter<LoadLevelEvent>,
) {
    for contact in contacts.read() {
        if contact.phase != ContactPhase::Enter || contact.other_kind != EntityKind::Player {
            continue;
        }
        let Ok(mut goal) = goals.get_mut(contact.source) else {
            continue;
        };
        if goal.reached {
            continue;
        }

        goal.reached = true;
        info!("Level goal reached, next level '{}'", goal.next_level);
        load_level.write(LoadLevelEvent {
            level_id: goal.next_level.clone(),
        });
    }
}

pub(crate) fn apply_activation_signals(
    mut signals: MessageReader<ActivationSignal>,
    mut panners: Query<&mut Panner>,
) {
    for signal in signals.read() {
        if let Ok(mut panner) = panners.get_mut(signal.target) {
            panner.apply(signal.activation);
        }
    }
}

pub(crate) fn move_panners(time: Res<Time>, mut query: Query<(&mut Panner, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut panner, mut transform) in &mut query {
        transform.translation = panner.advance(dt);
    }
}

pub(crate) fn spin_entities(time: Res<Time>, mut query: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut query {
        transform.rotate_y((spin.degrees_per_sec * dt).to_radians());
    }
}

pub(crate) fn scroll_hazards(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<&mut HazardScroll>,
) {
    let dt = time.delta_secs();
    for mut scroll in &mut query {
        let offset = scroll.advance(dt);
        if let Some(mut material) = materials.get_mut(&scroll.material) {
            material.uv_transform = Affine2::from_translation(offset);
        }
    }
}
