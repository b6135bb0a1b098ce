//! UI domain: title screen and in-level HUD.

mod hud;
mod title;

use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::ui::hud::{hide_hud, show_hud, spawn_hud, update_hud};
use crate::ui::title::{
    cleanup_title_screen, rock_title_model, spawn_title_screen, start_on_any_input,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(OnEnter(GameState::Title), spawn_title_screen)
            .add_systems(OnExit(GameState::Title), cleanup_title_screen)
            .add_systems(
                Update,
                (rock_title_model, start_on_any_input).run_if(in_state(GameState::Title)),
            )
            .add_systems(OnEnter(GameState::Playing), show_hud)
            .add_systems(OnExit(GameState::Playing), hide_hud)
            .add_systems(Update, update_hud.in_set(GameplaySet::Present));
    }
}
