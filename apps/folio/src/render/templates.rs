//! Per-section content templates used by the tabbed modal viewer.

use crate::dom::{Element, Node};
use crate::models::ResumeDocument;
use crate::render::{render_certifications, render_projects, Fragment};

/// Every section id that has a template.
pub const SECTION_IDS: &[&str] = &["vision", "timeline", "skills", "projects", "certifications"];

pub fn template_mount_id(section: &str) -> String {
    format!("template-{section}")
}

/// Content for section `id`, or `None` if no template exists for it.
pub fn render_section_template(doc: &ResumeDocument, id: &str) -> Option<Fragment> {
    let (title, body): (&str, Fragment) = match id {
        "vision" => ("Vision", vision(doc)),
        "timeline" => ("Timeline", timeline_summary(doc)),
        "skills" => ("Skills", skills_by_category(doc)),
        "projects" => ("Projects", render_projects(&doc.projects)),
        "certifications" => ("Certifications", render_certifications(&doc.certifications)),
        _ => return None,
    };

    Some(vec![Element::new("div")
        .class("section-template")
        .attr("data-template", id)
        .child(
            Element::new("h2")
                .class("font-orbitron text-3xl font-bold text-cyan-400 mb-6")
                .text(title),
        )
        .children(body)
        .into()])
}

fn vision(doc: &ResumeDocument) -> Fragment {
    let info = &doc.personal_info;
    vec![
        Element::new("p")
            .class("text-2xl font-bold")
            .text(info.name.as_str())
            .into(),
        Element::new("ul")
            .class("mt-2 text-slate-400")
            .children(info.taglines.iter().map(|t| Element::new("li").text(t.as_str())))
            .into(),
        Element::new("dl")
            .class("mt-6 grid grid-cols-2 gap-4")
            .children(doc.impact_meters.iter().flat_map(|m| {
                [
                    Node::from(Element::new("dt").class("text-slate-400").text(m.label.as_str())),
                    Node::from(Element::new("dd").class("text-cyan-400").text(m.final_text())),
                ]
            }))
            .into(),
    ]
}

fn timeline_summary(doc: &ResumeDocument) -> Fragment {
    vec![Element::new("ol")
        .class("space-y-2")
        .children(doc.timeline.iter().map(|t| {
            Element::new("li")
                .child(Element::new("span").class("text-cyan-400").text(t.period.as_str()))
                .text(format!(" {} @ {}", t.role, t.company))
        }))
        .into()]
}

fn skills_by_category(doc: &ResumeDocument) -> Fragment {
    doc.skill_categories()
        .into_iter()
        .map(|cat| {
            Element::new("div")
                .class("mb-4")
                .child(Element::new("h4").class("font-bold").text(cat))
                .child(
                    Element::new("ul").children(
                        doc.skills
                            .iter()
                            .filter(|s| s.category == cat)
                            .map(|s| {
                                Element::new("li").text(format!(
                                    "{} — {:.0}%",
                                    s.name,
                                    s.proficiency * 100.0
                                ))
                            }),
                    ),
                )
                .into()
        })
        .collect()
}
