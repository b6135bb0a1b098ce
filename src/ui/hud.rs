//! UI domain: timer and counter HUD.

use bevy::prelude::*;

use crate::lifecycle::PlayerLife;
use crate::movement::Player;

pub(crate) const HUD_PADDING: f32 = 16.0;
const HUD_FONT_SIZE: f32 = 20.0;
const TIMER_FONT_SIZE: f32 = 36.0;

/// Formatted HUD values for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudReadout {
    pub timer: String,
    pub max_timer: String,
    pub corpse_limit: String,
    pub keys: String,
    pub jump_count: String,
}

impl HudReadout {
    pub fn from_life(life: &PlayerLife) -> Self {
        Self {
            timer: format!("{:.2}", life.timer),
            max_timer: format!("x{:.2}", life.respawn_time),
            corpse_limit: format!("x{}", life.corpse_limit),
            keys: format!("x{}", life.keys),
            jump_count: format!("x{}", life.jump_count),
        }
    }
}

/// Text entities the HUD writes into, created once at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct HudSink {
    pub root: Entity,
    pub timer: Entity,
    pub max_timer: Entity,
    pub corpse_limit: Entity,
    pub keys: Entity,
    pub jump_count: Entity,
}

impl HudSink {
    fn slots(&self) -> [Entity; 5] {
        [
            self.timer,
            self.max_timer,
            self.corpse_limit,
            self.keys,
            self.jump_count,
        ]
    }
}

fn spawn_counter(parent: &mut ChildSpawnerCommands, label: &str, swatch: Color) -> Entity {
    let mut text = Entity::PLACEHOLDER;
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Node {
                    width: Val::Px(14.0),
                    height: Val::Px(14.0),
                    ..default()
                },
                BackgroundColor(swatch),
            ));
            row.spawn((
                Text::new(label),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
            text = row
                .spawn((
                    Text::new("x0"),
                    TextFont {
                        font_size: HUD_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.95, 0.95)),
                ))
                .id();
        });
    text
}

pub(crate) fn spawn_hud(mut commands: Commands) {
    let mut timer = Entity::PLACEHOLDER;
    let mut max_timer = Entity::PLACEHOLDER;
    let mut corpse_limit = Entity::PLACEHOLDER;
    let mut keys = Entity::PLACEHOLDER;
    let mut jump_count = Entity::PLACEHOLDER;

    let root = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            timer = parent
                .spawn((
                    Text::new("0.00"),
                    TextFont {
                        font_size: TIMER_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::srgb(0.95, 0.85, 0.3)),
                ))
                .id();
            max_timer = spawn_counter(parent, "Time", Color::srgb(0.3, 0.85, 0.4));
            corpse_limit = spawn_counter(parent, "Corpses", Color::srgb(0.7, 0.7, 0.75));
            keys = spawn_counter(parent, "Keys", Color::srgb(0.95, 0.85, 0.25));
            jump_count = spawn_counter(parent, "Jumps", Color::srgb(0.3, 0.5, 0.95));
        })
        .id();

    commands.insert_resource(HudSink {
        root,
        timer,
        max_timer,
        corpse_limit,
        keys,
        jump_count,
    });
}

pub(crate) fn show_hud(sink: Option<Res<HudSink>>, mut query: Query<&mut Visibility>) {
    set_hud_visibility(sink, &mut query, Visibility::Inherited);
}

pub(crate) fn hide_hud(sink: Option<Res<HudSink>>, mut query: Query<&mut Visibility>) {
    set_hud_visibility(sink, &mut query, Visibility::Hidden);
}

fn set_hud_visibility(
    sink: Option<Res<HudSink>>,
    query: &mut Query<&mut Visibility>,
    visibility: Visibility,
) {
    let Some(sink) = sink else {
        return;
    };
    if let Ok(mut current) = query.get_mut(sink.root) {
        *current = visibility;
    }
}

pub(crate) fn update_hud(
    sink: Option<Res<HudSink>>,
    players: Query<&PlayerLife, (With<Player>, Changed<PlayerLife>)>,
    mut texts: Query<&mut Text>,
) {
    let Some(sink) = sink else {
        return;
    };
    let Ok(life) = players.single() else {
        return;
    };

    let readout = HudReadout::from_life(life);
    let values = [
        readout.timer,
        readout.max_timer,
        readout.corpse_limit,
        readout.keys,
        readout.jump_count,
    ];
    for (entity, value) in sink.slots().into_iter().zip(values) {
        if let Ok(mut text) = texts.get_mut(entity) {
            **text = value;
        }
    }
}
