//! Steering overlay: circles and marker drawn with gizmos, readout as UI text.

use bevy::prelude::*;
use mouseflyer_core::HudColor;
use mouseflyer_sim_core::{HudLayout, HudReadout};

use crate::MouseFlyerSettings;
use crate::flight::FlightControl;
use crate::pointer::{PointerSample, from_sim, to_sim};

const MARKER_RADIUS: f32 = 6.0;

/// Marks the text node that shows the current profile, mode and axes.
#[derive(Component, Debug, Default)]
pub struct HudText;

fn to_color(color: HudColor) -> Color {
    Color::srgba(color.r, color.g, color.b, color.a)
}

/// Current overlay layout, or `None` when nothing should be drawn.
pub fn current_layout(
    settings: &MouseFlyerSettings,
    flight: &FlightControl,
    pointer: &PointerSample,
) -> Option<HudLayout> {
    let controller = flight.controller()?;
    HudLayout::compute(
        controller,
        settings.global.flying_mode,
        to_sim(pointer.position),
        settings.profiles.active(),
        &settings.global,
        settings.runtime.hud_visibility(),
    )
}

pub fn draw_hud(
    settings: Res<MouseFlyerSettings>,
    flight: Res<FlightControl>,
    pointer: Res<PointerSample>,
    mut gizmos: Gizmos,
) {
    let Some(layout) = current_layout(&settings, &flight, &pointer) else {
        return;
    };
    // 2D camera space has the origin at the window center, y up.
    let center = from_sim(layout.center);
    let color = to_color(layout.color);
    if let Some(radius) = layout.outer_radius {
        gizmos.circle_2d(Isometry2d::IDENTITY, radius, color);
    }
    if let Some(radius) = layout.inner_radius {
        gizmos.circle_2d(Isometry2d::IDENTITY, radius, color);
    }
    let marker = from_sim(layout.marker) - center;
    gizmos.line_2d(Vec2::ZERO, marker, color);
    gizmos.circle_2d(Isometry2d::from_translation(marker), MARKER_RADIUS, color);
}

pub fn spawn_hud_text(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: px(12),
            top: px(12),
            ..default()
        },
        Visibility::Hidden,
    ));
}

pub fn update_hud_text(
    settings: Res<MouseFlyerSettings>,
    flight: Res<FlightControl>,
    pointer: Res<PointerSample>,
    mut texts: Query<(&mut Text, &mut TextColor, &mut Visibility), With<HudText>>,
) {
    let Ok((mut text, mut text_color, mut visibility)) = texts.single_mut() else {
        return;
    };
    let layout = current_layout(&settings, &flight, &pointer);
    let readout = layout
        .filter(|layout| layout.show_text_panel)
        .zip(flight.last_output());
    let Some((layout, output)) = readout else {
        visibility.set_if_neq(Visibility::Hidden);
        return;
    };
    visibility.set_if_neq(Visibility::Inherited);
    let color = to_color(layout.color);
    if text_color.0 != color {
        text_color.0 = color;
    }
    let content = HudReadout {
        profile: settings.profiles.active().name.clone(),
        mode: settings.global.flying_mode,
        output,
    }
    .to_string();
    if text.0 != content {
        content.clone_into(&mut **text);
    }
}
