use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{ResumeDocument, Theme, UiState, ALL_SKILLS};
use crate::render::SECTION_IDS;
use crate::theme_store::ThemeStore;

/// What a transition changed, i.e. which fragments need repainting.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Theme(Theme),
    ActiveSection {
        previous: Option<String>,
        current: String,
    },
    SkillFilter(String),
    ModalOpened(String),
    ModalClosed,
    PreloaderHidden,
}

/// Application context: the loaded document plus the session's UI state.
///
/// Transitions validate their input, mutate synchronously, and return the
/// resulting `Change`. `None` means the call was a no-op (unknown id, or the
/// value was already set) and nothing must be repainted.
pub struct ViewModel {
    document: Arc<ResumeDocument>,
    state: UiState,
    sections: Vec<String>,
    theme_store: Box<dyn ThemeStore>,
    skill_filter: watch::Sender<String>,
}

impl ViewModel {
    /// Builds the context with defaults; the theme comes from `theme_store`.
    pub fn new(
        document: Arc<ResumeDocument>,
        theme_store: Box<dyn ThemeStore>,
        nav_sections: impl IntoIterator<Item = String>,
    ) -> Self {
        let theme = theme_store.load().unwrap_or_default();
        let mut sections: Vec<String> = SECTION_IDS.iter().map(|s| s.to_string()).collect();
        for s in nav_sections {
            if !sections.contains(&s) {
                sections.push(s);
            }
        }
        let (skill_filter, _) = watch::channel(ALL_SKILLS.to_string());

        info!(theme = %theme, "UI state initialised");

        Self {
            document,
            state: UiState::new(theme),
            sections,
            theme_store,
            skill_filter,
        }
    }

    pub fn document(&self) -> &Arc<ResumeDocument> {
        &self.document
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Observers of the skill filter (the effects layer) subscribe here.
    pub fn subscribe_skill_filter(&self) -> watch::Receiver<String> {
        self.skill_filter.subscribe()
    }

    /// Replaces the document wholesale after a re-fetch. A filter whose
    /// category no longer exists falls back to `All`.
    pub fn replace_document(&mut self, document: Arc<ResumeDocument>) -> Option<Change> {
        self.document = document;
        let filter = self.state.active_skill_filter.clone();
        if filter != ALL_SKILLS && !self.document.skill_categories().contains(&filter.as_str()) {
            return self.set_skill_filter(ALL_SKILLS);
        }
        None
    }

    // ────────────────────────────────────────────────────────────────────────
    // Transitions
    // ────────────────────────────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) -> Option<Change> {
        if self.state.theme == theme {
            return None;
        }
        self.state.theme = theme;
        if let Err(e) = self.theme_store.save(theme) {
            AppError::from(e).report();
        }
        debug!(theme = %theme, "Theme changed");
        Some(Change::Theme(theme))
    }

    pub fn set_active_section(&mut self, id: &str) -> Option<Change> {
        if !self.sections.iter().any(|s| s == id) {
            AppError::UnknownTemplate(id.to_string()).report();
            return None;
        }
        if self.state.active_section.as_deref() == Some(id) {
            return None;
        }
        let previous = self.state.active_section.replace(id.to_string());
        debug!(section = id, "Active section changed");
        Some(Change::ActiveSection {
            previous,
            current: id.to_string(),
        })
    }

    pub fn set_skill_filter(&mut self, category: &str) -> Option<Change> {
        let known = category == ALL_SKILLS || self.document.skill_categories().contains(&category);
        if !known {
            AppError::UnknownCategory(category.to_string()).report();
            return None;
        }
        if self.state.active_skill_filter == category {
            return None;
        }
        self.state.active_skill_filter = category.to_string();
        self.skill_filter.send_replace(category.to_string());
        debug!(category, "Skill filter changed");
        Some(Change::SkillFilter(category.to_string()))
    }

    pub fn open_modal(&mut self, section: &str) -> Option<Change> {
        if !SECTION_IDS.contains(&section) {
            AppError::UnknownTemplate(section.to_string()).report();
            return None;
        }
        if self.state.modal_open && self.state.modal_section.as_deref() == Some(section) {
            return None;
        }
        self.state.modal_open = true;
        self.state.modal_section = Some(section.to_string());
        debug!(section, "Modal opened");
        Some(Change::ModalOpened(section.to_string()))
    }

    pub fn close_modal(&mut self) -> Option<Change> {
        if !self.state.modal_open {
            return None;
        }
        self.state.modal_open = false;
        self.state.modal_section = None;
        debug!("Modal closed");
        Some(Change::ModalClosed)
    }

    pub fn hide_preloader(&mut self) -> Option<Change> {
        if !self.state.preloader_visible {
            return None;
        }
        self.state.preloader_visible = false;
        Some(Change::PreloaderHidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonalInfo, Skill};
    use crate::theme_store::MemoryThemeStore;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            proficiency: 0.5,
        }
    }

    fn doc() -> Arc<ResumeDocument> {
        Arc::new(ResumeDocument {
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                taglines: vec![],
            },
            skills: vec![skill("Rust", "Engineering"), skill("Stats", "Data Science")],
            ..Default::default()
        })
    }

    fn view_model(store: Arc<MemoryThemeStore>) -> ViewModel {
        ViewModel::new(doc(), Box::new(store), vec!["vision".to_string()])
    }

    #[test]
    fn test_theme_defaults_to_dark_when_unset() {
        let vm = view_model(Arc::new(MemoryThemeStore::default()));
        assert_eq!(vm.state().theme, Theme::Dark);
    }

    #[test]
    fn test_theme_read_from_store() {
        let vm = view_model(Arc::new(MemoryThemeStore::with_theme(Theme::Light)));
        assert_eq!(vm.state().theme, Theme::Light);
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let store = Arc::new(MemoryThemeStore::default());
        let mut vm = view_model(store.clone());

        assert_eq!(vm.set_theme(Theme::Light), Some(Change::Theme(Theme::Light)));
        assert_eq!(vm.set_theme(Theme::Light), None);
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn test_set_theme_to_current_does_not_persist() {
        let store = Arc::new(MemoryThemeStore::default());
        let mut vm = view_model(store.clone());
        assert_eq!(vm.set_theme(Theme::Dark), None);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        vm.set_active_section("timeline").unwrap();
        assert_eq!(vm.set_active_section("blog"), None);
        assert_eq!(vm.state().active_section.as_deref(), Some("timeline"));
    }

    #[test]
    fn test_active_section_reports_previous() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        vm.set_active_section("vision");
        let change = vm.set_active_section("skills").unwrap();
        assert_eq!(
            change,
            Change::ActiveSection {
                previous: Some("vision".to_string()),
                current: "skills".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_category_is_noop() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        assert_eq!(vm.set_skill_filter("Cooking"), None);
        assert_eq!(vm.state().active_skill_filter, "All");
    }

    #[test]
    fn test_skill_filter_notifies_subscribers() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        let mut rx = vm.subscribe_skill_filter();
        assert_eq!(*rx.borrow_and_update(), "All");

        vm.set_skill_filter("Engineering").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "Engineering");

        vm.set_skill_filter(ALL_SKILLS).unwrap();
        assert_eq!(*rx.borrow_and_update(), "All");
    }

    #[test]
    fn test_modal_open_close() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        assert_eq!(vm.close_modal(), None);
        assert_eq!(
            vm.open_modal("projects"),
            Some(Change::ModalOpened("projects".to_string()))
        );
        assert!(vm.state().modal_open);
        assert_eq!(vm.open_modal("nope"), None);
        assert_eq!(vm.state().modal_section.as_deref(), Some("projects"));
        assert_eq!(vm.close_modal(), Some(Change::ModalClosed));
        assert!(!vm.state().modal_open);
        assert!(vm.state().modal_section.is_none());
    }

    #[test]
    fn test_hide_preloader_once() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        assert_eq!(vm.hide_preloader(), Some(Change::PreloaderHidden));
        assert_eq!(vm.hide_preloader(), None);
    }

    #[test]
    fn test_replace_document_resets_vanished_filter() {
        let mut vm = view_model(Arc::new(MemoryThemeStore::default()));
        vm.set_skill_filter("Data Science").unwrap();

        let next = Arc::new(ResumeDocument {
            skills: vec![skill("Rust", "Engineering")],
            ..Default::default()
        });
        assert_eq!(
            vm.replace_document(next),
            Some(Change::SkillFilter("All".to_string()))
        );
        assert!(vm.document().skills.len() == 1);
    }
}
