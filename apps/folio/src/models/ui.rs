use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter value that shows every skill node.
pub const ALL_SKILLS: &str = "All";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Mutable UI state for the page session.
///
/// Written only through `ViewModel` transitions; everyone else reads.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub active_section: Option<String>,
    pub active_skill_filter: String,
    pub modal_open: bool,
    /// Section whose template is mounted in the modal, while open.
    pub modal_section: Option<String>,
    pub preloader_visible: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            active_section: None,
            active_skill_filter: ALL_SKILLS.to_string(),
            modal_open: false,
            modal_section: None,
            preloader_visible: true,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_default_state() {
        let state = UiState::default();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.active_skill_filter, "All");
        assert!(state.active_section.is_none());
        assert!(!state.modal_open);
        assert!(state.preloader_visible);
    }
}
