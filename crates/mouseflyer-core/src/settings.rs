use serde::{Deserialize, Serialize};

use crate::mode::FlyingMode;

/// RGBA color of the HUD overlay, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl HudColor {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Encodes as `RRGGBBAA`.
    pub fn to_hex(self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| f32::from(v) / 255.0)
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 1.0 },
        })
    }
}

impl Default for HudColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Profile-agnostic settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub flying_mode: FlyingMode,
    /// Outer HUD circle radius as a fraction of screen height.
    pub outer_circle_radius_ratio: f32,
    pub hud_opacity: f32,
    pub hud_color: HudColor,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            flying_mode: FlyingMode::default(),
            outer_circle_radius_ratio: crate::DEFAULT_OUTER_RADIUS_RATIO,
            hud_opacity: 0.5,
            hud_color: HudColor::WHITE,
        }
    }
}
