// Renderer: pure fragment builders.
// Every builder maps a slice of the document (plus, where needed, a slice of
// UiState) to a fragment. No builder reads the page it will be mounted into.

pub mod certifications;
pub mod chrome;
pub mod landing;
pub mod meters;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod templates;
pub mod timeline;

use crate::dom::Node;

/// Children to mount under one mount point.
pub type Fragment = Vec<Node>;

pub use certifications::render_certifications;
pub use chrome::{render_error, render_page_shell, render_preloader};
pub use landing::render_landing;
pub use meters::render_impact_meters;
pub use nav::render_nav;
pub use projects::render_projects;
pub use skills::{render_skill_filters, render_skill_tooltip, TooltipView};
pub use templates::{render_section_template, template_mount_id, SECTION_IDS};
pub use timeline::{render_timeline, Side};

/// Stable mount point identifiers.
pub mod ids {
    pub const NAV: &str = "main-nav";
    pub const LANDING: &str = "landing";
    pub const LANDING_NAME: &str = "landing-name";
    pub const LANDING_TAGLINE: &str = "landing-tagline";
    pub const LANDING_CANVAS: &str = "landing-canvas";
    pub const IMPACT_METERS: &str = "impact-meters-container";
    pub const TIMELINE: &str = "timeline-container";
    pub const SKILLS_CANVAS: &str = "skills-canvas";
    pub const SKILL_FILTERS: &str = "skill-filters";
    pub const SKILL_TOOLTIP: &str = "skill-tooltip";
    pub const PROJECTS: &str = "projects-container";
    pub const CERTIFICATIONS: &str = "certifications-container";
    pub const MODAL_CONTAINER: &str = "modal-container";
    pub const MODAL_BODY: &str = "modal-body";
    pub const PRELOADER: &str = "preloader";
    pub const PROGRESS_ROCKET: &str = "progress-rocket";
    pub const RAIN_CANVAS: &str = "rain-canvas";
    pub const THEME_TOGGLE: &str = "theme-toggle";

    pub fn meter(index: usize) -> String {
        format!("meter-{index}")
    }

    pub fn timeline_item(index: usize) -> String {
        format!("timeline-item-{index}")
    }
}
