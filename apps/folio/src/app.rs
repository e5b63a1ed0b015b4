//! Bootstrap and the UI loop.
//!
//! `App` is the single owner of the page, the view model, and the running
//! effects. Everything that changes the page goes through it: user events
//! via `dispatch`, effect frames via the patch channel.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::Config;
use crate::data_source::DataSource;
use crate::dom::Page;
use crate::effects::{patch_channel, EffectTimings, EffectsController, Patch, PatchReceiver};
use crate::errors::AppError;
use crate::input::{Command, InputController, UiEvent};
use crate::models::ResumeDocument;
use crate::render::{
    ids, render_certifications, render_error, render_impact_meters, render_landing, render_nav,
    render_page_shell, render_preloader, render_projects, render_section_template,
    render_skill_filters, render_skill_tooltip, render_timeline, template_mount_id, Fragment,
    TooltipView, SECTION_IDS,
};
use crate::state::{Change, ViewModel};
use crate::theme_store::ThemeStore;

const PAGE_TITLE: &str = "Interactive Resume";
const PRELOAD_STEPS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Preloading,
    Loading,
    Rendering,
    Interactive,
    /// Terminal: the document could not be loaded.
    Error,
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootPhase::Preloading => "preloading",
            BootPhase::Loading => "loading",
            BootPhase::Rendering => "rendering",
            BootPhase::Interactive => "interactive",
            BootPhase::Error => "error",
        };
        f.write_str(name)
    }
}

pub struct App {
    config: Config,
    phase: BootPhase,
    page: Page,
    view_model: Option<ViewModel>,
    effects: Option<EffectsController>,
    patches: PatchReceiver,
    tooltip: Option<TooltipView>,
    renders: u64,
}

impl App {
    /// Runs startup to completion: preload, fetch, first paint, effects.
    ///
    /// A load failure is not an `Err`: the returned app sits in
    /// `BootPhase::Error` with the error view as its page.
    pub async fn bootstrap(
        config: Config,
        source: &dyn DataSource,
        theme_store: Box<dyn ThemeStore>,
    ) -> Self {
        let (tx, patches) = patch_channel();
        let page = Page::new(PAGE_TITLE, render_page_shell(&config.nav_links));
        let mut app = App {
            config,
            phase: BootPhase::Preloading,
            page,
            view_model: None,
            effects: None,
            patches,
            tooltip: None,
            renders: 0,
        };
        info!(phase = %app.phase, "Bootstrap started");

        app.preload().await;

        app.enter(BootPhase::Loading);
        let document = match source.load(&app.config.data_path).await {
            Ok(doc) => Arc::new(doc),
            Err(e) => {
                let path = e.path().to_string();
                AppError::from(e).report();
                app.page.replace_body(render_error(&path));
                app.enter(BootPhase::Error);
                return app;
            }
        };

        app.enter(BootPhase::Rendering);
        let sections: Vec<String> = app.config.nav_sections().map(String::from).collect();
        let view_model = ViewModel::new(document.clone(), theme_store, sections);
        app.page.set_root_class(view_model.state().theme.as_str());
        app.render_all(&document, &view_model);

        let mut effects = EffectsController::attach(
            &document,
            &app.page,
            EffectTimings::from(&app.config),
            app.config.viewport,
            tx,
        );
        effects.attach_skill_filter_listener(view_model.subscribe_skill_filter());
        app.effects = Some(effects);
        app.view_model = Some(view_model);

        app.transition(ViewModel::hide_preloader);
        app.enter(BootPhase::Interactive);
        app
    }

    fn enter(&mut self, phase: BootPhase) {
        info!(from = %self.phase, to = %phase, "Boot phase changed");
        self.phase = phase;
    }

    async fn preload(&mut self) {
        let step = self.config.preload / u32::from(PRELOAD_STEPS);
        for i in 1..=PRELOAD_STEPS {
            sleep(step).await;
            self.paint(ids::PRELOADER, render_preloader(i * (100 / PRELOAD_STEPS)));
        }
    }

    /// First paint: every fragment builder runs exactly once.
    fn render_all(&mut self, doc: &ResumeDocument, view_model: &ViewModel) {
        let state = view_model.state();
        let categories = doc.skill_categories();

        self.paint(
            ids::NAV,
            render_nav(&self.config.nav_links, state.active_section.as_deref()),
        );
        self.paint(ids::LANDING, render_landing(&doc.personal_info));
        self.paint(ids::IMPACT_METERS, render_impact_meters(&doc.impact_meters));
        self.paint(ids::TIMELINE, render_timeline(&doc.timeline));
        self.paint(
            ids::SKILL_FILTERS,
            render_skill_filters(&categories, &state.active_skill_filter),
        );
        self.paint(ids::PROJECTS, render_projects(&doc.projects));
        self.paint(ids::CERTIFICATIONS, render_certifications(&doc.certifications));
        for section in SECTION_IDS {
            if let Some(fragment) = render_section_template(doc, section) {
                self.paint(&template_mount_id(section), fragment);
            }
        }
        debug!(renders = self.renders, "Initial paint complete");
    }

    fn paint(&mut self, mount: &str, fragment: Fragment) {
        self.renders += 1;
        if let Err(e) = self.page.mount(mount, fragment) {
            e.report();
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Accessors
    // ────────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    pub fn effects(&self) -> Option<&EffectsController> {
        self.effects.as_ref()
    }

    /// Number of fragment builder results mounted so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    // ────────────────────────────────────────────────────────────────────────
    // Events
    // ────────────────────────────────────────────────────────────────────────

    /// Routes one user event. Events are ignored outside `Interactive`.
    ///
    /// Queued effect frames are applied first, so the patch queue has room
    /// for whatever the event triggers.
    pub fn dispatch(&mut self, event: UiEvent) {
        if self.phase != BootPhase::Interactive {
            debug!(phase = %self.phase, ?event, "Event ignored");
            return;
        }
        self.pump_patches();
        let Some(view_model) = self.view_model.as_ref() else {
            return;
        };
        let Some(command) = InputController::route(&event, view_model.state()) else {
            return;
        };
        self.execute(command);
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::SetActiveSection(id) => self.transition(|vm| vm.set_active_section(&id)),
            Command::SetTheme(theme) => self.transition(|vm| vm.set_theme(theme)),
            Command::SetSkillFilter(category) => {
                self.transition(|vm| vm.set_skill_filter(&category))
            }
            Command::OpenModal(section) => self.transition(|vm| vm.open_modal(&section)),
            Command::CloseModal => self.transition(ViewModel::close_modal),
            Command::Scroll { progress, visible } => {
                if let Some(effects) = self.effects.as_mut() {
                    effects.on_scroll(progress, &visible);
                }
            }
            Command::Hover(position) => self.hover(position),
            Command::Resize(viewport) => {
                self.config.viewport = viewport;
                if let Some(effects) = self.effects.as_mut() {
                    effects.resize(viewport);
                }
            }
        }
    }

    fn transition(&mut self, f: impl FnOnce(&mut ViewModel) -> Option<Change>) {
        let Some(view_model) = self.view_model.as_mut() else {
            return;
        };
        if let Some(change) = f(view_model) {
            self.apply(change);
        }
    }

    /// Repaints only what `change` affects.
    fn apply(&mut self, change: Change) {
        debug!(?change, "Applying change");
        let result = match change {
            Change::Theme(theme) => {
                self.page.set_root_class(theme.as_str());
                Ok(())
            }
            Change::ActiveSection { previous, current } => {
                self.paint(
                    ids::NAV,
                    render_nav(&self.config.nav_links, Some(current.as_str())),
                );
                previous
                    .map(|prev| self.page.toggle_class(&prev, "active", false))
                    .unwrap_or(Ok(()))
                    .and_then(|_| self.page.toggle_class(&current, "active", true))
            }
            Change::SkillFilter(category) => {
                if let Some(view_model) = self.view_model.as_ref() {
                    let doc = view_model.document().clone();
                    self.paint(
                        ids::SKILL_FILTERS,
                        render_skill_filters(&doc.skill_categories(), &category),
                    );
                }
                if let Some(effects) = self.effects.as_mut() {
                    effects.sync_skill_filter();
                }
                Ok(())
            }
            Change::ModalOpened(section) => self.show_modal(&section),
            Change::ModalClosed => self
                .page
                .toggle_class(ids::MODAL_CONTAINER, "hidden", true)
                .and_then(|_| self.page.mount(ids::MODAL_BODY, Vec::new())),
            Change::PreloaderHidden => self.page.toggle_class(ids::PRELOADER, "hidden", true),
        };
        if let Err(e) = result {
            e.report();
        }
    }

    fn show_modal(&mut self, section: &str) -> Result<(), AppError> {
        let fragment = self
            .view_model
            .as_ref()
            .and_then(|vm| render_section_template(vm.document(), section))
            .ok_or_else(|| AppError::UnknownTemplate(section.to_string()))?;
        self.paint(ids::MODAL_BODY, fragment);
        self.page.toggle_class(ids::MODAL_CONTAINER, "hidden", false)
    }

    fn hover(&mut self, position: Option<(f64, f64)>) {
        let Some(effects) = self.effects.as_mut() else {
            return;
        };
        let view = match position {
            Some((x, y)) => effects.pointer_move(x, y),
            None => {
                effects.pointer_leave();
                None
            }
        };
        if view == self.tooltip {
            return;
        }

        self.paint(ids::SKILL_TOOLTIP, render_skill_tooltip(view.as_ref()));
        let styled = match &view {
            Some(v) => self
                .page
                .set_style(ids::SKILL_TOOLTIP, "display", "block")
                .and_then(|_| self.page.set_style(ids::SKILL_TOOLTIP, "left", &format!("{:.0}px", v.x)))
                .and_then(|_| self.page.set_style(ids::SKILL_TOOLTIP, "top", &format!("{:.0}px", v.y))),
            None => self.page.set_style(ids::SKILL_TOOLTIP, "display", "none"),
        };
        if let Err(e) = styled {
            e.report();
        }
        self.tooltip = view;
    }

    // ────────────────────────────────────────────────────────────────────────
    // Effect frames
    // ────────────────────────────────────────────────────────────────────────

    /// Applies every effect patch queued so far. Returns how many were applied.
    ///
    /// The queue is bounded: while nobody drains it, continuous loops drop
    /// frames and one-shot effects wait for room.
    pub fn pump_patches(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(patch) = self.patches.try_recv() {
            self.apply_patch(patch);
            applied += 1;
        }
        applied
    }

    fn apply_patch(&mut self, patch: Patch) {
        let result = match &patch {
            Patch::Text { target, text } => self.page.set_text(target, text),
            Patch::Style {
                target,
                property,
                value,
            } => self.page.set_style(target, property, value),
        };
        if let Err(e) = result {
            e.report();
        }
    }

    /// The UI loop: interleaves user events with effect frames until the
    /// event channel closes.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => break,
                },
                Some(patch) = self.patches.recv() => self.apply_patch(patch),
            }
        }
        self.pump_patches();
        debug!("Event channel closed");
    }

    /// Cancels every running effect. The page stays as last painted.
    pub fn shutdown(&mut self) {
        if let Some(mut effects) = self.effects.take() {
            effects.teardown();
        }
        self.pump_patches();
        info!(renders = self.renders, "App shut down");
    }
}
