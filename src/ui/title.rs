//! UI domain: title screen with a rocking player model.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameplayDefaults;
use crate::core::LoadLevelEvent;
use crate::lifecycle::{BodyMesh, ColorRng};

/// Everything spawned for the title screen
#[derive(Component, Debug)]
pub struct TitleScreen;

/// The rocking model; `elapsed` counts from entering the title screen
#[derive(Component, Debug, Default)]
pub struct TitleModel {
    pub elapsed: f32,
}

/// Roll of the title model in degrees after `elapsed` seconds.
pub fn title_roll(elapsed: f32, amount: f32) -> f32 {
    elapsed.sin() * amount
}

/// Body, head and feet offsets and scales of the title model.
const MODEL_PARTS: [(Vec3, Vec3); 4] = [
    (Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
    (Vec3::new(0.0, 0.8, 0.0), Vec3::new(0.6, 0.6, 0.6)),
    (Vec3::new(-0.25, -0.65, 0.0), Vec3::new(0.3, 0.3, 0.5)),
    (Vec3::new(0.25, -0.65, 0.0), Vec3::new(0.3, 0.3, 0.5)),
];

pub(crate) fn spawn_title_screen(
    mut commands: Commands,
    body_mesh: Res<BodyMesh>,
    mut color_rng: ResMut<ColorRng>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands
        .spawn((
            TitleScreen,
            TitleModel::default(),
            Transform::from_xyz(0.0, 3.0, 8.0).with_scale(Vec3::splat(2.0)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for (offset, scale) in MODEL_PARTS {
                parent.spawn((
                    Mesh3d(body_mesh.0.clone()),
                    MeshMaterial3d(materials.add(color_rng.next_color())),
                    Transform::from_translation(offset).with_scale(scale),
                ));
            }
        });

    commands
        .spawn((
            TitleScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::FlexEnd,
                align_items: AlignItems::Center,
                padding: UiRect::bottom(Val::Px(60.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("CORPSE TRAIL"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press any key"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });

    info!("Title screen ready");
}

pub(crate) fn rock_title_model(
    time: Res<Time>,
    defaults: Option<Res<GameplayDefaults>>,
    mut query: Query<(&mut TitleModel, &mut Transform)>,
) {
    let amount = defaults
        .map(|d| d.title_rotate_amount)
        .unwrap_or_else(|| GameplayDefaults::default().title_rotate_amount);

    for (mut model, mut transform) in &mut query {
        model.elapsed += time.delta_secs();
        transform.rotation = Quat::from_rotation_z(title_roll(model.elapsed, amount).to_radians());
    }
}

pub(crate) fn start_on_any_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    defaults: Option<Res<GameplayDefaults>>,
    mut load_level: MessageWriter<LoadLevelEvent>,
) {
    let pressed = keyboard.get_just_pressed().next().is_some()
        || mouse.get_just_pressed().next().is_some();
    if !pressed {
        return;
    }

    let level_id = defaults
        .map(|d| d.first_level.clone())
        .unwrap_or_else(|| GameplayDefaults::default().first_level);
    load_level.write(LoadLevelEvent { level_id });
}

pub(crate) fn cleanup_title_screen(
    mut commands: Commands,
    query: Query<Entity, With<TitleScreen>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
