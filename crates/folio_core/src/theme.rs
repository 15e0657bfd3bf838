//! Color theme state owned by the page shell.
//!
//! # Invariants
//! - `System` follows the latest reported system preference.
//! - Toggling always produces an explicit preference.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme actually applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    preference: ThemePreference,
    system_prefers_dark: bool,
}

impl ThemeState {
    pub fn new(preference: ThemePreference, system_prefers_dark: bool) -> Self {
        Self {
            preference,
            system_prefers_dark,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn resolved(&self) -> Theme {
        match self.preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if self.system_prefers_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }

    /// Flips the resolved theme and pins it as an explicit preference.
    pub fn toggle(&mut self) -> Theme {
        self.preference = match self.resolved() {
            Theme::Light => ThemePreference::Dark,
            Theme::Dark => ThemePreference::Light,
        };
        self.resolved()
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
    }

    /// Records a system color-scheme change.
    pub fn system_changed(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemePreference, ThemeState};

    #[test]
    fn system_preference_tracks_system_changes() {
        let mut state = ThemeState::new(ThemePreference::System, false);
        assert_eq!(state.resolved(), Theme::Light);
        state.system_changed(true);
        assert_eq!(state.resolved(), Theme::Dark);
    }

    #[test]
    fn toggle_pins_explicit_preference() {
        let mut state = ThemeState::new(ThemePreference::System, true);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(state.preference(), ThemePreference::Light);

        state.system_changed(false);
        assert_eq!(state.toggle(), Theme::Dark);
        state.system_changed(false);
        assert_eq!(state.resolved(), Theme::Dark);
    }
}
