// Effects: decorative animated layers.
// Effects read UI state and static layout but never write UiState. They talk
// to the page only through `Patch` messages, which the UI loop applies.

pub mod galaxy;
pub mod rain;
pub mod reveal;
pub mod tagline;
pub mod task;
pub mod tween;
pub mod typing;

use std::time::Duration;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::config::Config;
use crate::dom::Page;
use crate::models::{ResumeDocument, ALL_SKILLS};
use crate::render::{ids, Side, TooltipView};

pub use galaxy::{RotationClock, SkillGalaxy, SkillNode};
pub use rain::{GlyphRng, RainField};
pub use reveal::{rocket_bottom, RevealPlan, ScrollReveals};
pub use task::TaskHandle;
pub use tween::CounterTween;

/// Animation frame period (~60 fps).
pub const FRAME: Duration = Duration::from_millis(16);
const REVEAL_DURATION: Duration = Duration::from_secs(1);
const TOOLTIP_OFFSET_PX: f64 = 15.0;
/// Capacity of the patch queue between the effects and the page.
pub const PATCH_QUEUE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An in-place update to one node of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    Text {
        target: String,
        text: String,
    },
    Style {
        target: String,
        property: &'static str,
        value: String,
    },
}

pub type PatchSender = mpsc::Sender<Patch>;
pub type PatchReceiver = mpsc::Receiver<Patch>;

pub fn patch_channel() -> (PatchSender, PatchReceiver) {
    mpsc::channel(PATCH_QUEUE)
}

/// Queues a frame of a continuous loop. When the page is not keeping up the
/// frame is dropped, since the next one replaces it anyway. Returns `false`
/// once the receiving side is gone.
pub fn offer_frame(tx: &PatchSender, patch: Patch) -> bool {
    match tx.try_send(patch) {
        Ok(()) | Err(TrySendError::Full(_)) => true,
        Err(TrySendError::Closed(_)) => false,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EffectTimings {
    pub tagline_interval: Duration,
    pub counter_duration: Duration,
    pub typing_interval: Duration,
}

impl From<&Config> for EffectTimings {
    fn from(config: &Config) -> Self {
        Self {
            tagline_interval: config.tagline_interval,
            counter_duration: config.counter_duration,
            typing_interval: config.typing_interval,
        }
    }
}

/// Owns every running effect and its handle.
///
/// Per-document effects (typing, tagline, counters, reveals) live for the
/// session. Viewport-bound effects (scene spins, rain) are cancelled and
/// replaced on every resize, so at most one rain loop is ever alive.
pub struct EffectsController {
    tx: PatchSender,
    viewport: Viewport,
    galaxy: SkillGalaxy,
    landing_clock: RotationClock,
    reveals: ScrollReveals,
    meters: Vec<CounterTween>,
    skill_filter: Option<watch::Receiver<String>>,
    persistent: Vec<TaskHandle>,
    scenes: Vec<TaskHandle>,
    rain: Option<TaskHandle>,
    rain_starts: u64,
}

impl EffectsController {
    /// Builds effect state from the rendered page and starts the ambient loops.
    /// Must be called from within a tokio runtime.
    pub fn attach(
        doc: &ResumeDocument,
        page: &Page,
        timings: EffectTimings,
        viewport: Viewport,
        tx: PatchSender,
    ) -> Self {
        // Reveal direction comes from the laid-out timeline, not the data.
        let sides = (0..doc.timeline.len())
            .map(|i| {
                match page
                    .get(&ids::timeline_item(i))
                    .and_then(|el| el.get_attr("data-side"))
                {
                    Some("left") => Side::Left,
                    _ => Side::Right,
                }
            })
            .collect();

        let mut controller = Self {
            tx,
            viewport,
            galaxy: SkillGalaxy::build(&doc.skills, viewport),
            landing_clock: RotationClock::default(),
            reveals: ScrollReveals::new(sides),
            meters: doc
                .impact_meters
                .iter()
                .map(|m| CounterTween::for_meter(m, timings.counter_duration))
                .collect(),
            skill_filter: None,
            persistent: Vec::new(),
            scenes: Vec::new(),
            rain: None,
            rain_starts: 0,
        };

        controller.hide_pending_items();
        controller.persistent.push(TaskHandle::spawn(
            "typing",
            typing::run_typing(
                ids::LANDING_NAME.to_string(),
                doc.personal_info.name.clone(),
                timings.typing_interval,
                controller.tx.clone(),
            ),
        ));
        controller.persistent.push(TaskHandle::spawn(
            "tagline",
            tagline::run_tagline_rotation(
                ids::LANDING_TAGLINE.to_string(),
                doc.personal_info.taglines.clone(),
                timings.tagline_interval,
                controller.tx.clone(),
            ),
        ));
        controller.start_scenes();
        controller.start_rain();

        info!(
            skills = controller.galaxy.nodes().len(),
            meters = controller.meters.len(),
            "Effects attached"
        );
        controller
    }

    fn send(&self, patch: Patch) {
        if let Err(TrySendError::Full(patch)) = self.tx.try_send(patch) {
            debug!(?patch, "Patch queue full, dropping patch");
        }
    }

    fn hide_pending_items(&self) {
        for (i, side) in self.reveals.pending_items() {
            let (opacity, transform) = tween::reveal_frame(side, 0.0);
            self.send(Patch::Style {
                target: ids::timeline_item(i),
                property: "opacity",
                value: opacity,
            });
            self.send(Patch::Style {
                target: ids::timeline_item(i),
                property: "transform",
                value: transform,
            });
        }
    }

    fn start_scenes(&mut self) {
        for mut scene in self.scenes.drain(..) {
            scene.cancel();
        }
        self.scenes.push(TaskHandle::spawn(
            "landing-particles",
            galaxy::run_spin(
                ids::LANDING_CANVAS.to_string(),
                self.landing_clock.clone(),
                self.tx.clone(),
            ),
        ));
        self.scenes.push(TaskHandle::spawn(
            "skills-galaxy",
            galaxy::run_spin(
                ids::SKILLS_CANVAS.to_string(),
                self.galaxy.clock(),
                self.tx.clone(),
            ),
        ));
    }

    fn start_rain(&mut self) {
        if let Some(mut previous) = self.rain.take() {
            previous.cancel();
        }
        let field = RainField::new(self.viewport, GlyphRng::from_entropy());
        debug!(columns = field.columns(), rows = field.rows(), "Starting rain");
        self.rain = Some(TaskHandle::spawn(
            "rain",
            rain::run_rain(ids::RAIN_CANVAS.to_string(), field, self.tx.clone()),
        ));
        self.rain_starts += 1;
    }

    // ────────────────────────────────────────────────────────────────────────
    // Skill filter integration
    // ────────────────────────────────────────────────────────────────────────

    /// Subscribes to skill filter changes published by the view model and
    /// applies the current filter right away.
    pub fn attach_skill_filter_listener(&mut self, mut listener: watch::Receiver<String>) {
        let category = listener.borrow_and_update().clone();
        self.skill_filter = Some(listener);
        self.apply_skill_filter(&category);
    }

    /// Applies a pending filter change, if any. Returns the visible node count
    /// when the filter was re-applied.
    pub fn sync_skill_filter(&mut self) -> Option<usize> {
        let rx = self.skill_filter.as_mut()?;
        if !rx.has_changed().unwrap_or(false) {
            return None;
        }
        let category = rx.borrow_and_update().clone();
        Some(self.apply_skill_filter(&category))
    }

    fn apply_skill_filter(&mut self, category: &str) -> usize {
        let visible =
            self.set_skill_visibility(|node| category == ALL_SKILLS || node.category == category);
        debug!(category, visible, "Skill filter applied");
        visible
    }

    /// Sets the visibility flag of every skill node; no nodes are rebuilt.
    pub fn set_skill_visibility(&mut self, predicate: impl Fn(&SkillNode) -> bool) -> usize {
        let had_hover = self.galaxy.hovered().is_some();
        let visible = self.galaxy.set_visibility(predicate);
        if had_hover && self.galaxy.hovered().is_none() {
            self.send(Patch::Style {
                target: ids::SKILL_TOOLTIP.to_string(),
                property: "display",
                value: "none".to_string(),
            });
        }
        visible
    }

    pub fn galaxy(&self) -> &SkillGalaxy {
        &self.galaxy
    }

    // ────────────────────────────────────────────────────────────────────────
    // Input-driven hooks
    // ────────────────────────────────────────────────────────────────────────

    /// Scroll update: moves the progress rocket and fires once-only reveals.
    pub fn on_scroll(&mut self, progress: f64, visible: &[String]) {
        self.send(Patch::Style {
            target: ids::PROGRESS_ROCKET.to_string(),
            property: "bottom",
            value: rocket_bottom(progress),
        });

        let plan = self.reveals.on_visible(visible);
        if plan == RevealPlan::default() {
            return;
        }
        self.persistent.retain(|h| !h.is_finished());

        if plan.start_meters {
            for (i, tween) in self.meters.iter().enumerate() {
                self.persistent.push(TaskHandle::spawn(
                    "counter",
                    tween::run_counter(ids::meter(i), tween.clone(), self.tx.clone()),
                ));
            }
        }
        for (i, side) in plan.items {
            self.persistent.push(TaskHandle::spawn(
                "reveal",
                tween::run_reveal(ids::timeline_item(i), side, REVEAL_DURATION, self.tx.clone()),
            ));
        }
    }

    /// Pointer over the skills canvas: returns what the tooltip should show.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<TooltipView> {
        self.galaxy.pick(x, y).map(|node| TooltipView {
            name: node.name.clone(),
            x: x + TOOLTIP_OFFSET_PX,
            y: y + TOOLTIP_OFFSET_PX,
        })
    }

    pub fn pointer_leave(&mut self) {
        self.galaxy.clear_hover();
    }

    /// Re-initialises viewport-bound effects, cancelling the old loops first.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.galaxy.set_viewport(viewport);
        self.start_scenes();
        self.start_rain();
        debug!(width = viewport.width, height = viewport.height, "Effects resized");
    }

    /// Number of effect loops still running.
    pub fn running_tasks(&self) -> usize {
        self.persistent
            .iter()
            .chain(self.scenes.iter())
            .chain(self.rain.iter())
            .filter(|h| !h.is_finished())
            .count()
    }

    pub fn running_rain_loops(&self) -> usize {
        self.rain.iter().filter(|h| !h.is_finished()).count()
    }

    /// How many rain loops have been started over the session.
    pub fn rain_starts(&self) -> u64 {
        self.rain_starts
    }

    /// Cancels every running effect.
    pub fn teardown(&mut self) {
        for handle in self
            .persistent
            .iter_mut()
            .chain(self.scenes.iter_mut())
            .chain(self.rain.iter_mut())
        {
            handle.cancel();
        }
        self.persistent.clear();
        self.scenes.clear();
        self.rain = None;
    }
}

impl Drop for EffectsController {
    fn drop(&mut self) {
        self.teardown();
    }
}
