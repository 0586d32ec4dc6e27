use gtk::gdk;
use gtk4 as gtk;
use log::warn;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::capture::BackendChoice;
use crate::error::SaveError;
use crate::output::default_screenshots_dir;

pub const SCREENSHOTS_DIR_VAR: &str = "SNIPPER_SCREENSHOTS_DIR";
pub const BACKEND_VAR: &str = "SNIPPER_BACKEND";
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Cancel,
    Capture,
    Quit,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::Cancel => "Cancel Selection",
            Action::Capture => "Capture Screenshot",
            Action::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Cancel,
            Shortcut {
                key: gdk::Key::Escape,
                modifiers: gdk::ModifierType::empty(),
            },
        );
        bindings.insert(
            Action::Capture,
            Shortcut {
                key: gdk::Key::Return,
                modifiers: gdk::ModifierType::empty(),
            },
        );
        bindings.insert(
            Action::Quit,
            Shortcut {
                key: gdk::Key::q,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;

        // Keypad Enter is an alias for Return
        let key = if key == gdk::Key::KP_Enter {
            gdk::Key::Return
        } else {
            key
        };

        self.bindings
            .iter()
            .find(|(_, shortcut)| shortcut.key == key && shortcut.modifiers == clean_mods)
            .map(|(action, _)| *action)
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(sc) => gtk::accelerator_get_label(sc.key, sc.modifiers).to_string(),
            None => String::new(),
        }
    }

    /// One-line hint for the settings window
    pub fn hint(&self) -> String {
        format!(
            "{}: {}  ·  {}: {}",
            self.get_shortcut_label(Action::Capture),
            Action::Capture.label(),
            self.get_shortcut_label(Action::Cancel),
            Action::Cancel.label(),
        )
    }
}

/// Startup configuration: defaults overridden from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when there is no home directory and no override
    pub screenshots_dir: Option<PathBuf>,
    pub backend: BackendChoice,
    /// How long the settings window gets to disappear before the grab
    pub hide_delay: Duration,
    pub shortcuts: Rc<ShortcutConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screenshots_dir: default_screenshots_dir(),
            backend: BackendChoice::Auto,
            hide_delay: DEFAULT_HIDE_DELAY,
            shortcuts: Rc::new(ShortcutConfig::default()),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(SCREENSHOTS_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.screenshots_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup(BACKEND_VAR) {
            match BackendChoice::parse(&value) {
                Some(choice) => config.backend = choice,
                None => warn!("Ignoring unknown {}={:?}", BACKEND_VAR, value),
            }
        }

        config
    }

    pub fn screenshots_dir(&self) -> Result<&Path, SaveError> {
        self.screenshots_dir.as_deref().ok_or(SaveError::NoHomeDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_default_shortcuts() {
        let shortcuts = ShortcutConfig::default();
        let none = gdk::ModifierType::empty();

        assert_eq!(shortcuts.get_action(gdk::Key::Escape, none), Some(Action::Cancel));
        assert_eq!(shortcuts.get_action(gdk::Key::Return, none), Some(Action::Capture));
        assert_eq!(shortcuts.get_action(gdk::Key::KP_Enter, none), Some(Action::Capture));
        assert_eq!(
            shortcuts.get_action(gdk::Key::q, gdk::ModifierType::CONTROL_MASK),
            Some(Action::Quit)
        );
        assert_eq!(shortcuts.get_action(gdk::Key::q, none), None);
    }

    #[test]
    fn test_lock_modifiers_ignored() {
        let shortcuts = ShortcutConfig::default();
        assert_eq!(
            shortcuts.get_action(gdk::Key::Escape, gdk::ModifierType::LOCK_MASK),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_vars(vars(&[]));
        assert_eq!(config.backend, BackendChoice::Auto);
        assert_eq!(config.hide_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_config_overrides() {
        let config = AppConfig::from_vars(vars(&[
            (SCREENSHOTS_DIR_VAR, "/tmp/shots"),
            (BACKEND_VAR, "grim"),
        ]));
        assert_eq!(config.screenshots_dir().unwrap(), Path::new("/tmp/shots"));
        assert_eq!(config.backend, BackendChoice::Grim);
    }

    #[test]
    fn test_unknown_backend_keeps_default() {
        let config = AppConfig::from_vars(vars(&[(BACKEND_VAR, "scrot")]));
        assert_eq!(config.backend, BackendChoice::Auto);
    }

    #[test]
    fn test_missing_dir_is_no_home() {
        let config = AppConfig {
            screenshots_dir: None,
            ..AppConfig::default()
        };
        assert!(matches!(config.screenshots_dir(), Err(SaveError::NoHomeDir)));
    }
}
