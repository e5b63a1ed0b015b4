//! Page chrome: the empty shell with every mount point, the preloader, and
//! the full-viewport error view.

use crate::config::NavLink;
use crate::dom::{Element, Node};
use crate::render::templates::{template_mount_id, SECTION_IDS};
use crate::render::{ids, Fragment};

fn section(id: &str, title: Option<&str>) -> Element {
    let el = Element::new("section")
        .id(id)
        .class("min-h-screen py-20 px-4 md:px-12");
    match title {
        Some(t) => el.child(
            Element::new("h2")
                .class("font-orbitron text-4xl font-bold text-center mb-12")
                .text(t),
        ),
        None => el,
    }
}

/// The page body before any data is loaded: every mount point present and
/// empty, the preloader visible, the modal hidden.
pub fn render_page_shell(nav_links: &[NavLink]) -> Element {
    Element::new("body")
        .id("app")
        .class("bg-gray-900 text-white")
        .child(
            Element::new("div")
                .id(ids::PRELOADER)
                .class("preloader fixed inset-0 z-50 flex items-center justify-center")
                .children(render_preloader(0)),
        )
        .child(
            Element::new("div")
                .class("rain-layer fixed inset-0 pointer-events-none")
                .child(Element::new("pre").id(ids::RAIN_CANVAS).class("matrix-rain")),
        )
        .child(
            Element::new("nav")
                .id(ids::NAV)
                .class("fixed left-0 top-0 h-full flex flex-col space-y-4 p-4 z-40")
                .attr("data-links", nav_links.len().to_string()),
        )
        .child(
            Element::new("button")
                .id(ids::THEME_TOGGLE)
                .class("fixed top-4 right-4 z-40 glass-panel p-2 rounded-full")
                .attr("aria-label", "Toggle theme")
                .text("◐"),
        )
        .child(
            Element::new("div")
                .class("progress-track fixed right-2 bottom-0 h-full w-8")
                .child(
                    Element::new("div")
                        .id(ids::PROGRESS_ROCKET)
                        .class("absolute")
                        .attr("style", "bottom: 0%")
                        .text("🚀"),
                ),
        )
        .child(
            Element::new("main")
                .id("main")
                .child(
                    section("vision", None)
                        .child(Element::new("canvas").id(ids::LANDING_CANVAS).class("absolute inset-0"))
                        .child(Element::new("div").id(ids::LANDING).class("relative z-10 text-center"))
                        .child(
                            Element::new("div")
                                .id(ids::IMPACT_METERS)
                                .class("grid grid-cols-2 md:grid-cols-4 gap-6 mt-16"),
                        ),
                )
                .child(
                    section("timeline", Some("Career Timeline"))
                        .child(Element::new("div").id(ids::TIMELINE).class("relative space-y-12")),
                )
                .child(
                    section("skills", Some("Skills Galaxy"))
                        .child(Element::new("div").id(ids::SKILL_FILTERS).class("flex flex-wrap justify-center gap-2 mb-6"))
                        .child(Element::new("canvas").id(ids::SKILLS_CANVAS).class("w-full h-[60vh]"))
                        .child(
                            Element::new("div")
                                .id(ids::SKILL_TOOLTIP)
                                .class("fixed glass-panel px-2 py-1 rounded text-sm pointer-events-none")
                                .attr("style", "display: none"),
                        ),
                )
                .child(
                    section("projects", Some("Projects"))
                        .child(Element::new("div").id(ids::PROJECTS).class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")),
                )
                .child(
                    section("certifications", Some("Certifications"))
                        .child(Element::new("div").id(ids::CERTIFICATIONS).class("flex flex-wrap justify-center gap-6")),
                ),
        )
        .children(
            SECTION_IDS
                .iter()
                .map(|id| Element::new("template").id(template_mount_id(id))),
        )
        .child(
            Element::new("div")
                .id(ids::MODAL_CONTAINER)
                .class("modal fixed inset-0 z-50 hidden")
                .child(
                    Element::new("div")
                        .class("modal-backdrop absolute inset-0 bg-black/70")
                        .attr("data-action", "close-modal"),
                )
                .child(
                    Element::new("div")
                        .class("modal-panel glass-panel relative max-w-3xl mx-auto mt-20 p-8 rounded-xl")
                        .child(
                            Element::new("button")
                                .class("modal-close absolute top-4 right-4")
                                .attr("data-action", "close-modal")
                                .attr("aria-label", "Close")
                                .text("×"),
                        )
                        .child(Element::new("div").id(ids::MODAL_BODY)),
                ),
        )
}

/// Preloader content for a synthetic progress percentage.
pub fn render_preloader(percent: u8) -> Fragment {
    let percent = percent.min(100);
    vec![Element::new("div")
        .class("text-center")
        .child(
            Element::new("div")
                .class("preloader-bar h-1 bg-cyan-400")
                .attr("style", format!("width: {percent}%")),
        )
        .child(
            Element::new("p")
                .class("font-orbitron mt-4 text-cyan-400")
                .text(format!("{percent}%")),
        )
        .into()]
}

/// Full-viewport error view shown when the résumé data cannot be loaded.
pub fn render_error(path: &str) -> Element {
    Element::new("body").id("app").child(
        Element::new("div")
            .id("error-view")
            .class("h-screen w-screen flex items-center justify-center text-red-500 text-center p-4")
            .child(
                Element::new("p")
                    .child(Element::new("strong").text("Error:"))
                    .text(" Failed to load resume data from ")
                    .child(Element::new("code").text(path))
                    .text("."),
            )
            .child(
                Element::new("p")
                    .class("mt-2 text-sm text-slate-400")
                    .child(Node::text(
                        "Please ensure the file exists and is accessible. Check the logs for more details.",
                    )),
            ),
    )
}
