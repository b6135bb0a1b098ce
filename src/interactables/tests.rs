//! Interactables domain: tests for buttons, doors, panners, hazard scrolling,
//! contact translation and collectible pickups.

use avian3d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::contacts::translate_contacts;
use super::events::{Activation, ContactPhase};
use super::systems::handle_collectible_pickups;
use super::{
    ActivationSignal, ButtonSwitch, Collectible, Door, HazardScroll, Panner, ReportsStay,
    TriggerContact,
};
use crate::content::{CollectibleKind, LevelPlayerOverrides};
use crate::lifecycle::PlayerLife;
use crate::movement::{EntityKind, PlayerTuning};

const EPSILON: f32 = 1e-5;

fn player_with_keys(keys: u32) -> PlayerLife {
    let mut life = PlayerLife::new(
        &PlayerTuning::default(),
        &LevelPlayerOverrides::default(),
        Vec3::ZERO,
    );
    life.keys = keys;
    life
}

// -----------------------------------------------------------------------------
// Buttons
// -----------------------------------------------------------------------------

#[test]
fn test_button_activates_once_while_held() {
    let mut button = ButtonSwitch::new(vec![Entity::from_bits(3)]);

    assert_eq!(button.press(EntityKind::Player), Some(Activation::Activate));
    assert!(button.active);
    // Stay contacts while already active do nothing
    assert_eq!(button.press(EntityKind::Player), None);
    assert_eq!(button.press(EntityKind::Corpse), None);
}

#[test]
fn test_button_releases_on_exit() {
    let mut button = ButtonSwitch::new(Vec::new());
    assert_eq!(button.release(EntityKind::Player), None);

    button.press(EntityKind::Corpse);
    assert_eq!(button.release(EntityKind::Corpse), Some(Activation::Deactivate));
    assert!(!button.active);
}

#[test]
fn test_button_ignores_non_bodies() {
    let mut button = ButtonSwitch::new(Vec::new());
    assert_eq!(button.press(EntityKind::Collectible), None);
    assert_eq!(button.press(EntityKind::Panner), None);
    assert!(!button.active);

    button.press(EntityKind::Player);
    assert_eq!(button.release(EntityKind::Scenery), None);
    assert!(button.active);
}

#[test]
fn test_corpse_left_on_button_presses_it_again_after_player_leaves() {
    let mut button = ButtonSwitch::new(Vec::new());
    button.press(EntityKind::Player);
    button.press(EntityKind::Corpse);

    assert_eq!(button.release(EntityKind::Player), Some(Activation::Deactivate));
    // The corpse is still overlapping and reports a stay contact next frame
    assert_eq!(button.press(EntityKind::Corpse), Some(Activation::Activate));
}

// -----------------------------------------------------------------------------
// Doors
// -----------------------------------------------------------------------------

#[test]
fn test_door_consumes_exactly_one_key() {
    let mut door = Door::new(Vec::new());
    let mut life = player_with_keys(2);

    assert!(door.try_open(&mut life));
    assert_eq!(life.keys, 1);
    assert!(!door.enabled);

    // Already open: no second key is taken
    assert!(!door.try_open(&mut life));
    assert_eq!(life.keys, 1);
}

#[test]
fn test_door_stays_locked_without_keys() {
    let mut door = Door::new(Vec::new());
    let mut life = player_with_keys(0);

    assert!(!door.try_open(&mut life));
    assert!(door.enabled);
    assert_eq!(life.keys, 0);
}

// -----------------------------------------------------------------------------
// Panners
// -----------------------------------------------------------------------------

#[test]
fn test_panner_moves_toward_offset_while_engaged() {
    let mut panner = Panner::new(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), 0.5, 1);
    panner.apply(Activation::Activate);

    let position = panner.advance(1.0);
    assert!((position - Vec3::new(0.0, 2.0, 0.0)).length() < EPSILON);

    let position = panner.advance(10.0);
    assert_eq!(panner.delta, 1.0);
    assert!((position - Vec3::new(0.0, 4.0, 0.0)).length() < EPSILON);
}

#[test]
fn test_panner_returns_when_released() {
    let mut panner = Panner::new(Vec3::X, Vec3::new(2.0, 0.0, 0.0), 1.0, 1);
    panner.apply(Activation::Activate);
    panner.advance(1.0);

    panner.apply(Activation::Deactivate);
    let position = panner.advance(0.25);
    assert!((panner.delta - 0.75).abs() < EPSILON);
    assert!((position - Vec3::new(2.5, 0.0, 0.0)).length() < EPSILON);

    let position = panner.advance(5.0);
    assert_eq!(panner.delta, 0.0);
    assert_eq!(position, Vec3::X);
}

#[test]
fn test_panner_needs_full_activation_cost() {
    let mut panner = Panner::new(Vec3::ZERO, Vec3::Y, 1.0, 2);
    panner.apply(Activation::Activate);
    assert!(!panner.is_engaged());
    assert_eq!(panner.advance(1.0), Vec3::ZERO);

    panner.apply(Activation::Activate);
    assert!(panner.is_engaged());
}

#[test]
fn test_panner_counter_is_signed() {
    let mut panner = Panner::new(Vec3::ZERO, Vec3::Y, 1.0, 1);
    panner.apply(Activation::Deactivate);
    assert_eq!(panner.active, -1);

    panner.apply(Activation::Activate);
    assert!(!panner.is_engaged());
}

// -----------------------------------------------------------------------------
// Hazard scroll
// -----------------------------------------------------------------------------

#[test]
fn test_hazard_scroll_accumulates_sine_steps() {
    let mut scroll = HazardScroll::new(Vec2::new(1.0, 0.0), Handle::default());

    let first = scroll.advance(0.5);
    assert!((first.x - 0.5f32.sin()).abs() < EPSILON);
    assert_eq!(first.y, 0.0);

    let second = scroll.advance(0.5);
    assert!((second.x - 2.0 * 0.5f32.sin()).abs() < EPSILON);
}

// -----------------------------------------------------------------------------
// Contact translation
// -----------------------------------------------------------------------------

fn contact_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<CollisionEnd>>();
    world.init_resource::<Messages<TriggerContact>>();
    world.init_resource::<Messages<ActivationSignal>>();
    world
}

fn drain_contacts(world: &mut World) -> Vec<(Entity, Entity, EntityKind, ContactPhase)> {
    world
        .resource_mut::<Messages<TriggerContact>>()
        .drain()
        .map(|c| (c.source, c.other, c.other_kind, c.phase))
        .collect()
}

#[test]
fn test_collision_start_and_end_reach_both_sides() {
    let mut world = contact_world();
    let player = world.spawn(EntityKind::Player).id();
    let button = world.spawn(EntityKind::Button).id();

    world.resource_mut::<Messages<CollisionStart>>().write(CollisionStart {
        collider1: player,
        collider2: button,
        body1: Some(player),
        body2: None,
    });
    world.resource_mut::<Messages<CollisionEnd>>().write(CollisionEnd {
        collider1: button,
        collider2: player,
        body1: None,
        body2: Some(player),
    });
    world
        .run_system_once(translate_contacts)
        .expect("translate_contacts should run");

    assert_eq!(
        drain_contacts(&mut world),
        vec![
            (player, button, EntityKind::Button, ContactPhase::Enter),
            (button, player, EntityKind::Player, ContactPhase::Enter),
            (button, player, EntityKind::Player, ContactPhase::Exit),
            (player, button, EntityKind::Button, ContactPhase::Exit),
        ]
    );
}

#[test]
fn test_untyped_side_gets_no_contact() {
    let mut world = contact_world();
    let player = world.spawn(EntityKind::Player).id();
    let untyped = world.spawn_empty().id();

    world.resource_mut::<Messages<CollisionStart>>().write(CollisionStart {
        collider1: player,
        collider2: untyped,
        body1: Some(player),
        body2: None,
    });
    world
        .run_system_once(translate_contacts)
        .expect("translate_contacts should run");

    // Only the untyped entity hears about the player
    assert_eq!(
        drain_contacts(&mut world),
        vec![(untyped, player, EntityKind::Player, ContactPhase::Enter)]
    );
}

#[test]
fn test_stay_only_for_reporting_sources() {
    let mut world = contact_world();
    let corpse = world.spawn(EntityKind::Corpse).id();
    let button = world
        .spawn((EntityKind::Button, ReportsStay, CollidingEntities::default()))
        .id();
    let door = world
        .spawn((EntityKind::Door, CollidingEntities::default()))
        .id();
    for sensor in [button, door] {
        world
            .get_mut::<CollidingEntities>(sensor)
            .expect("sensor tracks collisions")
            .insert(corpse);
    }

    world
        .run_system_once(translate_contacts)
        .expect("translate_contacts should run");

    assert_eq!(
        drain_contacts(&mut world),
        vec![(button, corpse, EntityKind::Corpse, ContactPhase::Stay)]
    );
}

// -----------------------------------------------------------------------------
// Collectible pickups
// -----------------------------------------------------------------------------

#[test]
fn test_collectible_is_consumed_once_per_frame() {
    let mut world = contact_world();
    let player = world.spawn((EntityKind::Player, player_with_keys(0))).id();
    let key = world
        .spawn((
            EntityKind::Collectible,
            Collectible {
                kind: CollectibleKind::Key,
                amount: 1.0,
                targets: Vec::new(),
            },
        ))
        .id();

    for _ in 0..2 {
        world
            .resource_mut::<Messages<TriggerContact>>()
            .write(TriggerContact {
                source: key,
                other: player,
                other_kind: EntityKind::Player,
                phase: ContactPhase::Enter,
            });
    }
    world
        .run_system_once(handle_collectible_pickups)
        .expect("handle_collectible_pickups should run");

    assert_eq!(world.get::<PlayerLife>(player).map(|life| life.keys), Some(1));
    assert!(world.get_entity(key).is_err());
}

#[test]
fn test_event_collectible_activates_its_targets() {
    let mut world = contact_world();
    let player = world.spawn((EntityKind::Player, player_with_keys(0))).id();
    let panner = world.spawn(EntityKind::Panner).id();
    let event = world
        .spawn((
            EntityKind::Collectible,
            Collectible {
                kind: CollectibleKind::Event,
                amount: 0.0,
                targets: vec![panner],
            },
        ))
        .id();

    world
        .resource_mut::<Messages<TriggerContact>>()
        .write(TriggerContact {
            source: event,
            other: player,
            other_kind: EntityKind::Player,
            phase: ContactPhase::Enter,
        });
    world
        .run_system_once(handle_collectible_pickups)
        .expect("handle_collectible_pickups should run");

    let signals: Vec<(Entity, Activation)> = world
        .resource_mut::<Messages<ActivationSignal>>()
        .drain()
        .map(|signal| (signal.target, signal.activation))
        .collect();
    assert_eq!(signals, vec![(panner, Activation::Activate)]);
}
