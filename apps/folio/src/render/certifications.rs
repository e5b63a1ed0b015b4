use crate::dom::Element;
use crate::models::Certification;
use crate::render::Fragment;

/// Hexagonal badges linking to each credential.
pub fn render_certifications(certs: &[Certification]) -> Fragment {
    certs
        .iter()
        .map(|c| {
            Element::new("a")
                .attr("href", c.url.as_str())
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .class("hex-badge-wrapper")
                .child(
                    Element::new("div").class("hex-badge").child(
                        Element::new("div")
                            .child(
                                Element::new("p")
                                    .class("font-bold text-cyan-400")
                                    .text(c.name.as_str()),
                            )
                            .child(
                                Element::new("p")
                                    .class("text-xs text-slate-400 mt-2")
                                    .text(c.issuer.as_str()),
                            ),
                    ),
                )
                .into()
        })
        .collect()
}
