//! Interactables domain: translates physics contacts into typed trigger contacts.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::interactables::components::ReportsStay;
use crate::interactables::events::{ContactPhase, TriggerContact};
use crate::movement::EntityKind;

pub(crate) fn translate_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    kinds: Query<&EntityKind>,
    stay_reporters: Query<(Entity, &CollidingEntities), With<ReportsStay>>,
    mut contacts: MessageWriter<TriggerContact>,
) {
    for event in collision_start_events.read() {
        write_pair(
            event.collider1,
            event.collider2,
            ContactPhase::Enter,
            &kinds,
            &mut contacts,
        );
    }

    for event in collision_end_events.read() {
        write_pair(
            event.collider1,
            event.collider2,
            ContactPhase::Exit,
            &kinds,
            &mut contacts,
        );
    }

    for (source, colliding) in &stay_reporters {
        for &other in colliding.iter() {
            let Ok(&other_kind) = kinds.get(other) else {
                continue;
            };
            contacts.write(TriggerContact {
                source,
                other,
                other_kind,
                phase: ContactPhase::Stay,
            });
        }
    }
}

fn write_pair(
    a: Entity,
    b: Entity,
    phase: ContactPhase,
    kinds: &Query<&EntityKind>,
    contacts: &mut MessageWriter<TriggerContact>,
) {
    for (source, other) in [(a, b), (b, a)] {
        // Despawned mid-contact or untyped: not our concern
        let Ok(&other_kind) = kinds.get(other) else {
            continue;
        };
        contacts.write(TriggerContact {
            source,
            other,
            other_kind,
            phase,
        });
    }
}
