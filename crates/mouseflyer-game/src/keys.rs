//! Config-file key names mapped to Bevy key codes and back.
//!
//! Names use the stored config spelling ("I", "LeftBracket", "Alpha1").

use bevy::prelude::*;
use mouseflyer_input_map::{BindingAction, KeyBindings};

const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("A", KeyCode::KeyA),
    ("B", KeyCode::KeyB),
    ("C", KeyCode::KeyC),
    ("D", KeyCode::KeyD),
    ("E", KeyCode::KeyE),
    ("F", KeyCode::KeyF),
    ("G", KeyCode::KeyG),
    ("H", KeyCode::KeyH),
    ("I", KeyCode::KeyI),
    ("J", KeyCode::KeyJ),
    ("K", KeyCode::KeyK),
    ("L", KeyCode::KeyL),
    ("M", KeyCode::KeyM),
    ("N", KeyCode::KeyN),
    ("O", KeyCode::KeyO),
    ("P", KeyCode::KeyP),
    ("Q", KeyCode::KeyQ),
    ("R", KeyCode::KeyR),
    ("S", KeyCode::KeyS),
    ("T", KeyCode::KeyT),
    ("U", KeyCode::KeyU),
    ("V", KeyCode::KeyV),
    ("W", KeyCode::KeyW),
    ("X", KeyCode::KeyX),
    ("Y", KeyCode::KeyY),
    ("Z", KeyCode::KeyZ),
    ("Alpha0", KeyCode::Digit0),
    ("Alpha1", KeyCode::Digit1),
    ("Alpha2", KeyCode::Digit2),
    ("Alpha3", KeyCode::Digit3),
    ("Alpha4", KeyCode::Digit4),
    ("Alpha5", KeyCode::Digit5),
    ("Alpha6", KeyCode::Digit6),
    ("Alpha7", KeyCode::Digit7),
    ("Alpha8", KeyCode::Digit8),
    ("Alpha9", KeyCode::Digit9),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
    ("Backslash", KeyCode::Backslash),
    ("LeftBracket", KeyCode::BracketLeft),
    ("RightBracket", KeyCode::BracketRight),
    ("BackQuote", KeyCode::Backquote),
    ("Minus", KeyCode::Minus),
    ("Equals", KeyCode::Equal),
    ("Semicolon", KeyCode::Semicolon),
    ("Quote", KeyCode::Quote),
    ("Comma", KeyCode::Comma),
    ("Period", KeyCode::Period),
    ("Slash", KeyCode::Slash),
    ("Tab", KeyCode::Tab),
    ("Space", KeyCode::Space),
    ("Insert", KeyCode::Insert),
    ("Delete", KeyCode::Delete),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
];

pub fn key_code_from_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    KEY_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

pub fn key_code_name(code: KeyCode) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(name, _)| *name)
}

fn default_key_code(action: BindingAction) -> KeyCode {
    match action {
        BindingAction::ToggleMouseSteering => KeyCode::KeyO,
        BindingAction::ToggleFlyingMode => KeyCode::KeyI,
        BindingAction::ToggleMenu => KeyCode::KeyP,
        BindingAction::ToggleHud => KeyCode::Backslash,
        BindingAction::NextProfile => KeyCode::BracketRight,
        BindingAction::PreviousProfile => KeyCode::BracketLeft,
    }
}

pub fn default_key_codes() -> KeyBindings<KeyCode> {
    KeyBindings::from_fn(default_key_code)
}

/// Resolves stored key names; unknown names fall back to the action's default.
pub fn resolve_key_bindings(names: &KeyBindings<String>) -> KeyBindings<KeyCode> {
    KeyBindings::from_fn(|action| {
        let name = names.get(action);
        key_code_from_name(name).unwrap_or_else(|| {
            let fallback = default_key_code(action);
            warn!(
                action = action.config_key(),
                key = %name,
                fallback = ?fallback,
                "unknown key name in config, using default"
            );
            fallback
        })
    })
}

/// Key names for persisting; codes without a name keep the default name.
pub fn key_binding_names(codes: &KeyBindings<KeyCode>) -> KeyBindings<String> {
    KeyBindings::from_fn(|action| {
        key_code_name(*codes.get(action))
            .unwrap_or(action.default_key_name())
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_resolve_to_default_codes() {
        let resolved = resolve_key_bindings(&KeyBindings::default_names());
        assert_eq!(resolved, default_key_codes());
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(key_code_from_name("leftbracket"), Some(KeyCode::BracketLeft));
        assert_eq!(key_code_from_name(" f10 "), Some(KeyCode::F10));
    }

    #[test]
    fn unknown_name_falls_back() {
        let mut names = KeyBindings::default_names();
        names.set(BindingAction::ToggleMenu, "Hyper".to_string());
        let resolved = resolve_key_bindings(&names);
        assert_eq!(*resolved.get(BindingAction::ToggleMenu), KeyCode::KeyP);
    }

    #[test]
    fn codes_render_back_to_names() {
        let mut codes = default_key_codes();
        codes.set(BindingAction::ToggleHud, KeyCode::F3);
        let names = key_binding_names(&codes);
        assert_eq!(names.get(BindingAction::ToggleHud), "F3");
        assert_eq!(names.get(BindingAction::NextProfile), "RightBracket");
    }
}
