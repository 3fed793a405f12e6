use serde::{Deserialize, Serialize};

/// Rebindable keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingAction {
    ToggleMouseSteering,
    ToggleFlyingMode,
    ToggleMenu,
    ToggleHud,
    NextProfile,
    PreviousProfile,
}

impl BindingAction {
    pub const ALL: [Self; 6] = [
        Self::ToggleMouseSteering,
        Self::ToggleFlyingMode,
        Self::ToggleMenu,
        Self::ToggleHud,
        Self::NextProfile,
        Self::PreviousProfile,
    ];

    pub fn config_key(self) -> &'static str {
        match self {
            Self::ToggleMouseSteering => "ToggleMouseSteeringKey",
            Self::ToggleFlyingMode => "ToggleFlyingModeKey",
            Self::ToggleMenu => "ToggleMenuKey",
            Self::ToggleHud => "ToggleHUDKey",
            Self::NextProfile => "NextProfileKey",
            Self::PreviousProfile => "PreviousProfileKey",
        }
    }

    pub fn from_config_key(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.config_key() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ToggleMouseSteering => "Toggle Mouse Steering",
            Self::ToggleFlyingMode => "Toggle Flying Mode",
            Self::ToggleMenu => "Toggle Menu",
            Self::ToggleHud => "Toggle HUD",
            Self::NextProfile => "Next Profile",
            Self::PreviousProfile => "Prev. Profile",
        }
    }

    pub fn default_key_name(self) -> &'static str {
        match self {
            Self::ToggleMouseSteering => "O",
            Self::ToggleFlyingMode => "I",
            Self::ToggleMenu => "P",
            Self::ToggleHud => "Backslash",
            Self::NextProfile => "RightBracket",
            Self::PreviousProfile => "LeftBracket",
        }
    }
}

/// One key per [`BindingAction`], addressed through a fixed `match` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings<K> {
    toggle_mouse_steering: K,
    toggle_flying_mode: K,
    toggle_menu: K,
    toggle_hud: K,
    next_profile: K,
    previous_profile: K,
}

impl<K> KeyBindings<K> {
    /// Builds bindings by asking `key_for` once per action.
    pub fn from_fn(mut key_for: impl FnMut(BindingAction) -> K) -> Self {
        Self {
            toggle_mouse_steering: key_for(BindingAction::ToggleMouseSteering),
            toggle_flying_mode: key_for(BindingAction::ToggleFlyingMode),
            toggle_menu: key_for(BindingAction::ToggleMenu),
            toggle_hud: key_for(BindingAction::ToggleHud),
            next_profile: key_for(BindingAction::NextProfile),
            previous_profile: key_for(BindingAction::PreviousProfile),
        }
    }

    pub fn try_from_fn<E>(
        mut key_for: impl FnMut(BindingAction) -> Result<K, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            toggle_mouse_steering: key_for(BindingAction::ToggleMouseSteering)?,
            toggle_flying_mode: key_for(BindingAction::ToggleFlyingMode)?,
            toggle_menu: key_for(BindingAction::ToggleMenu)?,
            toggle_hud: key_for(BindingAction::ToggleHud)?,
            next_profile: key_for(BindingAction::NextProfile)?,
            previous_profile: key_for(BindingAction::PreviousProfile)?,
        })
    }

    pub fn get(&self, action: BindingAction) -> &K {
        match action {
            BindingAction::ToggleMouseSteering => &self.toggle_mouse_steering,
            BindingAction::ToggleFlyingMode => &self.toggle_flying_mode,
            BindingAction::ToggleMenu => &self.toggle_menu,
            BindingAction::ToggleHud => &self.toggle_hud,
            BindingAction::NextProfile => &self.next_profile,
            BindingAction::PreviousProfile => &self.previous_profile,
        }
    }

    fn slot_mut(&mut self, action: BindingAction) -> &mut K {
        match action {
            BindingAction::ToggleMouseSteering => &mut self.toggle_mouse_steering,
            BindingAction::ToggleFlyingMode => &mut self.toggle_flying_mode,
            BindingAction::ToggleMenu => &mut self.toggle_menu,
            BindingAction::ToggleHud => &mut self.toggle_hud,
            BindingAction::NextProfile => &mut self.next_profile,
            BindingAction::PreviousProfile => &mut self.previous_profile,
        }
    }

    /// Rebinds `action`, returning the previous key.
    pub fn set(&mut self, action: BindingAction, key: K) -> K {
        std::mem::replace(self.slot_mut(action), key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BindingAction, &K)> {
        BindingAction::ALL
            .into_iter()
            .map(move |action| (action, self.get(action)))
    }

    pub fn try_map<U, E>(&self, mut convert: impl FnMut(&K) -> Result<U, E>) -> Result<KeyBindings<U>, E> {
        KeyBindings::try_from_fn(|action| convert(self.get(action)))
    }
}

impl<K: PartialEq> KeyBindings<K> {
    /// First action bound to `key`, in [`BindingAction::ALL`] order.
    pub fn action_for(&self, key: &K) -> Option<BindingAction> {
        self.iter()
            .find(|(_, bound)| *bound == key)
            .map(|(action, _)| action)
    }
}

impl KeyBindings<String> {
    pub fn default_names() -> Self {
        Self::from_fn(|action| action.default_key_name().to_string())
    }
}
