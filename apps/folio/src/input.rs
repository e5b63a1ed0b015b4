//! Input routing: one table from user events to what the app should do.

use crate::effects::Viewport;
use crate::models::{Theme, UiState};

pub const ESCAPE: &str = "Escape";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    Button,
    Backdrop,
}

/// A user interaction, already decoded from whatever produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    NavClick(String),
    ThemeToggle,
    SkillFilterClick(String),
    ModalOpen(String),
    ModalClose(CloseSource),
    KeyDown(String),
    /// `progress` in 0–1; `visible` lists the mount ids now in the viewport.
    Scroll { progress: f64, visible: Vec<String> },
    /// Pointer position over the skills canvas, in canvas pixels.
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    Resize(Viewport),
}

/// What an event asks for: either a view model transition or an effects hook.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetActiveSection(String),
    SetTheme(Theme),
    SetSkillFilter(String),
    OpenModal(String),
    CloseModal,
    Scroll { progress: f64, visible: Vec<String> },
    Hover(Option<(f64, f64)>),
    Resize(Viewport),
}

pub struct InputController;

impl InputController {
    /// Maps `event` to a command given the current state. `None` means the
    /// event does nothing in this state.
    pub fn route(event: &UiEvent, state: &UiState) -> Option<Command> {
        let command = match event {
            UiEvent::NavClick(section) => Command::SetActiveSection(section.clone()),
            UiEvent::ThemeToggle => Command::SetTheme(state.theme.toggled()),
            UiEvent::SkillFilterClick(category) => Command::SetSkillFilter(category.clone()),
            UiEvent::ModalOpen(section) => Command::OpenModal(section.clone()),
            UiEvent::ModalClose(_) => Command::CloseModal,
            UiEvent::KeyDown(key) if key == ESCAPE && state.modal_open => Command::CloseModal,
            UiEvent::KeyDown(_) => return None,
            UiEvent::Scroll { progress, visible } => Command::Scroll {
                progress: *progress,
                visible: visible.clone(),
            },
            UiEvent::PointerMove { x, y } => Command::Hover(Some((*x, *y))),
            UiEvent::PointerLeave => Command::Hover(None),
            UiEvent::Resize(viewport) => Command::Resize(*viewport),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_is_noop_when_modal_closed() {
        let state = UiState::default();
        assert_eq!(InputController::route(&UiEvent::KeyDown(ESCAPE.into()), &state), None);
    }

    #[test]
    fn test_escape_closes_open_modal() {
        let state = UiState {
            modal_open: true,
            ..UiState::default()
        };
        assert_eq!(
            InputController::route(&UiEvent::KeyDown(ESCAPE.into()), &state),
            Some(Command::CloseModal)
        );
        assert_eq!(InputController::route(&UiEvent::KeyDown("Enter".into()), &state), None);
    }

    #[test]
    fn test_theme_toggle_flips_current() {
        let dark = UiState::new(Theme::Dark);
        let light = UiState::new(Theme::Light);
        assert_eq!(
            InputController::route(&UiEvent::ThemeToggle, &dark),
            Some(Command::SetTheme(Theme::Light))
        );
        assert_eq!(
            InputController::route(&UiEvent::ThemeToggle, &light),
            Some(Command::SetTheme(Theme::Dark))
        );
    }

    #[test]
    fn test_close_sources_route_the_same() {
        let state = UiState::default();
        for source in [CloseSource::Button, CloseSource::Backdrop] {
            assert_eq!(
                InputController::route(&UiEvent::ModalClose(source), &state),
                Some(Command::CloseModal)
            );
        }
    }

    #[test]
    fn test_clicks_map_one_to_one() {
        let state = UiState::default();
        assert_eq!(
            InputController::route(&UiEvent::NavClick("skills".into()), &state),
            Some(Command::SetActiveSection("skills".into()))
        );
        assert_eq!(
            InputController::route(&UiEvent::SkillFilterClick("Engineering".into()), &state),
            Some(Command::SetSkillFilter("Engineering".into()))
        );
        assert_eq!(
            InputController::route(&UiEvent::ModalOpen("projects".into()), &state),
            Some(Command::OpenModal("projects".into()))
        );
    }
}
