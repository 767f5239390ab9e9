//! Customizable keyboard shortcuts
//!
//! Maps key presses to presentation actions. Bindings are persisted with the
//! settings file so presenters can remap their clicker keys.

use std::collections::HashMap;

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Navigation
    NextSlide,
    PrevSlide,
    FirstSlide,
    LastSlide,

    // Stage controls
    ToggleFullscreen,
    ExitFullscreen,
    ToggleDecorations,
    ToggleDarkMode,
    Quit,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[
            Action::NextSlide,
            Action::PrevSlide,
            Action::FirstSlide,
            Action::LastSlide,
            Action::ToggleFullscreen,
            Action::ExitFullscreen,
            Action::ToggleDecorations,
            Action::ToggleDarkMode,
            Action::Quit,
        ]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::NextSlide => "Next slide",
            Action::PrevSlide => "Previous slide",
            Action::FirstSlide => "First slide",
            Action::LastSlide => "Last slide",
            Action::ToggleFullscreen => "Toggle fullscreen",
            Action::ExitFullscreen => "Exit fullscreen",
            Action::ToggleDecorations => "Toggle decorations",
            Action::ToggleDarkMode => "Toggle dark stage",
            Action::Quit => "Quit",
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    /// Create a new keybinding without modifiers
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    // Letters used by the stage controls
    B,
    D,
    F,
    Q,

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Special
    Space,
    Enter,
    Escape,
    F11,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!(
                    (self, c.as_str()),
                    (KeyCode::B, "b")
                        | (KeyCode::D, "d")
                        | (KeyCode::F, "f")
                        | (KeyCode::Q, "q")
                )
            }
            Key::Named(named) => matches!(
                (self, named),
                (KeyCode::Up, Named::ArrowUp)
                    | (KeyCode::Down, Named::ArrowDown)
                    | (KeyCode::Left, Named::ArrowLeft)
                    | (KeyCode::Right, Named::ArrowRight)
                    | (KeyCode::Home, Named::Home)
                    | (KeyCode::End, Named::End)
                    | (KeyCode::PageUp, Named::PageUp)
                    | (KeyCode::PageDown, Named::PageDown)
                    | (KeyCode::Space, Named::Space)
                    | (KeyCode::Enter, Named::Enter)
                    | (KeyCode::Escape, Named::Escape)
                    | (KeyCode::F11, Named::F11)
            ),
            _ => false,
        }
    }
}

/// User-configurable map from actions to their shortcuts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(
            Action::NextSlide,
            vec![
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::Down),
                KeyBinding::new(KeyCode::Space),
                KeyBinding::new(KeyCode::Enter),
                KeyBinding::new(KeyCode::PageDown),
            ],
        );
        bindings.insert(
            Action::PrevSlide,
            vec![
                KeyBinding::new(KeyCode::Left),
                KeyBinding::new(KeyCode::Up),
                KeyBinding::new(KeyCode::PageUp),
            ],
        );
        bindings.insert(Action::FirstSlide, vec![KeyBinding::new(KeyCode::Home)]);
        bindings.insert(Action::LastSlide, vec![KeyBinding::new(KeyCode::End)]);
        bindings.insert(
            Action::ToggleFullscreen,
            vec![KeyBinding::new(KeyCode::F), KeyBinding::new(KeyCode::F11)],
        );
        bindings.insert(
            Action::ExitFullscreen,
            vec![KeyBinding::new(KeyCode::Escape)],
        );
        bindings.insert(
            Action::ToggleDecorations,
            vec![KeyBinding::new(KeyCode::D)],
        );
        bindings.insert(Action::ToggleDarkMode, vec![KeyBinding::new(KeyCode::B)]);
        bindings.insert(
            Action::Quit,
            vec![KeyBinding::new(KeyCode::Q).ctrl()],
        );
        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action bound to a key event, if any
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings.iter().find_map(|(action, bindings)| {
            bindings
                .iter()
                .any(|b| b.matches(key, modifiers))
                .then_some(*action)
        })
    }

    /// Shortcuts bound to an action
    pub fn bindings_for(&self, action: Action) -> &[KeyBinding] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(key: Named) -> Key {
        Key::Named(key)
    }

    #[test]
    fn default_navigation_keys_resolve() {
        let bindings = KeyBindings::default();
        let none = Modifiers::default();

        assert_eq!(
            bindings.find_action(&named(Named::ArrowRight), &none),
            Some(Action::NextSlide)
        );
        assert_eq!(
            bindings.find_action(&named(Named::Space), &none),
            Some(Action::NextSlide)
        );
        assert_eq!(
            bindings.find_action(&named(Named::ArrowLeft), &none),
            Some(Action::PrevSlide)
        );
        assert_eq!(
            bindings.find_action(&named(Named::Home), &none),
            Some(Action::FirstSlide)
        );
        assert_eq!(
            bindings.find_action(&named(Named::End), &none),
            Some(Action::LastSlide)
        );
    }

    #[test]
    fn character_keys_match_case_insensitively() {
        let bindings = KeyBindings::default();
        let none = Modifiers::default();

        for c in ["f", "F"] {
            assert_eq!(
                bindings.find_action(&Key::Character(c.into()), &none),
                Some(Action::ToggleFullscreen)
            );
        }
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let bindings = KeyBindings::default();
        let q = Key::Character("q".into());

        assert_eq!(bindings.find_action(&q, &Modifiers::default()), None);
        assert_eq!(
            bindings.find_action(&q, &Modifiers::CTRL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn every_action_has_a_default_binding() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert!(
                !bindings.bindings_for(*action).is_empty(),
                "{} has no default shortcut",
                action.display_name()
            );
        }
    }

    #[test]
    fn no_key_is_bound_to_two_actions() {
        let bindings = KeyBindings::default();
        let mut seen: Vec<&KeyBinding> = Vec::new();
        for action in Action::all() {
            for binding in bindings.bindings_for(*action) {
                assert!(
                    !seen.contains(&binding),
                    "duplicate binding: {binding:?}"
                );
                seen.push(binding);
            }
        }
    }

    #[test]
    fn bindings_survive_serialization() {
        let bindings = KeyBindings::default();
        let json = serde_json::to_string(&bindings).unwrap();
        let restored: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            restored.find_action(&named(Named::ArrowRight), &Modifiers::default()),
            Some(Action::NextSlide)
        );
    }
}
