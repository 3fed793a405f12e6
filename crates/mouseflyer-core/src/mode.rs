use serde::{Deserialize, Serialize};

/// Pointer acquisition strategy.
///
/// `Absolute` maps the pointer's offset from the screen center to the axes
/// ("Alternative" in the settings window). `Relative` maps per-tick pointer
/// motion ("Normal").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlyingMode {
    Absolute,
    #[default]
    Relative,
}

impl FlyingMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Absolute => Self::Relative,
            Self::Relative => Self::Absolute,
        }
    }

    pub fn config_name(self) -> &'static str {
        match self {
            Self::Absolute => "Alternative",
            Self::Relative => "Normal",
        }
    }

    pub fn from_config_name(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Alternative" => Some(Self::Absolute),
            "Normal" => Some(Self::Relative),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Absolute => {
                "Mouse cursor is unlocked and roll/pitch rate is based on distance from the center of the screen. Deadzone can be configured."
            }
            Self::Relative => {
                "Mouse cursor is locked and roll/pitch only occurs while the mouse is moving."
            }
        }
    }
}
