//! Core domain: level flow systems and scene setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::LoadLevelEvent;
use crate::core::resources::CurrentLevel;
use crate::core::state::GameState;

pub(crate) fn transition_to_title(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Title);
}

/// Handle level load requests. The last request in a frame wins.
pub(crate) fn handle_load_level(
    mut events: MessageReader<LoadLevelEvent>,
    mut current_level: ResMut<CurrentLevel>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    info!(
        "Loading level '{}' (from {:?})",
        event.level_id,
        current_level.id()
    );
    current_level.set(event.level_id.clone());
    game_state.set(GameState::Loading);
}

pub(crate) fn finish_loading(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 14.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
