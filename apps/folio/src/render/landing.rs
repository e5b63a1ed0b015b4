use crate::dom::Element;
use crate::models::PersonalInfo;
use crate::render::{ids, Fragment};

/// Landing hero: the name plus the first tagline. Tagline rotation and the
/// typing effect later rewrite these two text nodes in place.
pub fn render_landing(info: &PersonalInfo) -> Fragment {
    let tagline = info.taglines.first().map(String::as_str).unwrap_or("");
    vec![
        Element::new("h1")
            .id(ids::LANDING_NAME)
            .class("font-orbitron text-5xl md:text-7xl font-bold")
            .text(info.name.as_str())
            .into(),
        Element::new("p")
            .id(ids::LANDING_TAGLINE)
            .class("mt-4 text-xl md:text-2xl text-cyan-400")
            .text(tagline)
            .into(),
    ]
}
