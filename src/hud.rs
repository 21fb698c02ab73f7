use avian3d::prelude::*;
use bevy::prelude::*;

use crate::arena::Score;
use crate::ball::Ball;

const SCORE_FONT_SIZE: f32 = 28.0;
const SPEED_FONT_SIZE: f32 = 20.0;
const HUD_MARGIN: f32 = 12.0;
const HUD_PADDING: f32 = 8.0;
const HUD_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);
/// Arena units per second to the miles per hour shown on screen
const MPH_PER_UNIT_SPEED: f32 = 10.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            (
                update_score_text.run_if(resource_changed::<Score>),
                update_speed_text,
            ),
        );
    }
}

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct SpeedText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        Name::new("ScoreText"),
        Text::new(score_label(&Score::default())),
        TextFont {
            font_size: SCORE_FONT_SIZE,
            ..default()
        },
        BackgroundColor(HUD_BACKGROUND),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(HUD_MARGIN),
            justify_self: JustifySelf::Center,
            padding: UiRect::axes(Val::Px(HUD_PADDING * 2.0), Val::Px(HUD_PADDING)),
            ..default()
        },
    ));

    commands.spawn((
        SpeedText,
        Name::new("SpeedText"),
        Text::new(speed_label(0.0)),
        TextFont {
            font_size: SPEED_FONT_SIZE,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(HUD_MARGIN),
            justify_self: JustifySelf::Center,
            ..default()
        },
    ));
}

fn score_label(score: &Score) -> String { format!("{}  -  {}", score.player, score.opponent) }

fn speed_label(speed: f32) -> String { format!("{:.0} mph", speed * MPH_PER_UNIT_SPEED) }

fn update_score_text(score: Res<Score>, mut texts: Query<&mut Text, With<ScoreText>>) {
    for mut text in &mut texts {
        text.0 = score_label(&score);
    }
}

fn update_speed_text(
    balls: Query<&LinearVelocity, With<Ball>>,
    mut texts: Query<&mut Text, With<SpeedText>>,
) {
    let Ok(velocity) = balls.single() else {
        return;
    };

    let label = speed_label(velocity.length());
    for mut text in &mut texts {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}
