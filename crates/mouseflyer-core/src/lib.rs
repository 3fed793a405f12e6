pub mod edit;
pub mod mode;
pub mod profile;
pub mod profiles;
pub mod settings;

pub use edit::PendingEdit;
pub use mode::FlyingMode;
pub use profile::{Profile, ProfileError};
pub use profiles::ProfileManager;
pub use settings::{GlobalSettings, HudColor};

/// Section name every persisted key lives under.
pub const CONFIG_SECTION: &str = "MouseFlyer";
pub const DEFAULT_MAX_PROFILES: usize = 5;
pub const DEFAULT_OUTER_RADIUS_RATIO: f32 = 0.35;
/// Upper bound the settings window allows for sensitivities and yaw correction.
pub const SENSITIVITY_UI_MAX: f32 = 5.0;
