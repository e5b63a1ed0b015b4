use crate::dom::Element;
use crate::models::{Strand, TimelineEntry};
use crate::render::{ids, Fragment};

/// Which column a timeline item sits in on wide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Horizontal offset a reveal animation starts from.
    pub fn reveal_offset(&self) -> f64 {
        match self {
            Side::Left => -100.0,
            Side::Right => 100.0,
        }
    }
}

/// Per-strand visual bucket.
struct StrandStyle {
    side: Side,
    alignment: &'static str,
    marker_position: &'static str,
    border: &'static str,
    icon: &'static str,
}

fn strand_style(strand: Strand) -> StrandStyle {
    match strand {
        Strand::Industrial => StrandStyle {
            side: Side::Left,
            alignment: "lg:mr-auto lg:pr-8",
            marker_position: "lg:-right-4",
            border: "border-sky-500",
            icon: "⚙️",
        },
        Strand::Data => StrandStyle {
            side: Side::Right,
            alignment: "lg:ml-auto lg:pl-8",
            marker_position: "lg:-left-4",
            border: "border-fuchsia-500",
            icon: "🤖",
        },
        // Unknown tracks share the right column with a neutral look.
        Strand::Other => StrandStyle {
            side: Side::Right,
            alignment: "lg:ml-auto lg:pl-8",
            marker_position: "lg:-left-4",
            border: "border-slate-500",
            icon: "•",
        },
    }
}

/// Side of the timeline an entry with `strand` is laid out on.
pub fn side_for(strand: Strand) -> Side {
    strand_style(strand).side
}

/// Alternating two-track timeline. Item identity is its index (`data-index`,
/// `timeline-item-{i}`).
pub fn render_timeline(entries: &[TimelineEntry]) -> Fragment {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = strand_style(entry.strand);
            Element::new("div")
                .id(ids::timeline_item(i))
                .class(format!(
                    "timeline-item w-full lg:w-1/2 {} relative",
                    style.alignment
                ))
                .attr("data-index", i.to_string())
                .attr("data-side", style.side.as_str())
                .child(
                    Element::new("div")
                        .class(format!(
                            "absolute top-5 {} w-8 h-8 bg-gray-800 rounded-full flex items-center justify-center text-xl z-10 border-2 {}",
                            style.marker_position, style.border
                        ))
                        .text(style.icon),
                )
                .child(
                    Element::new("div")
                        .class(format!("glass-panel p-6 rounded-lg border-l-4 {}", style.border))
                        .child(
                            Element::new("p")
                                .class("text-sm text-cyan-400")
                                .text(entry.period.as_str()),
                        )
                        .child(
                            Element::new("h3")
                                .class("font-bold text-xl mt-1")
                                .text(entry.role.as_str()),
                        )
                        .child(
                            Element::new("p")
                                .class("text-slate-300 font-semibold")
                                .text(entry.company.as_str()),
                        )
                        .child(
                            Element::new("ul")
                                .class("mt-4 space-y-2 text-slate-400 text-sm list-disc list-inside")
                                .children(
                                    entry
                                        .points
                                        .iter()
                                        .map(|p| Element::new("li").text(p.as_str())),
                                ),
                        ),
                )
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;

    fn entry(strand: Strand, points: &[&str]) -> TimelineEntry {
        TimelineEntry {
            period: "2020-2022".to_string(),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            strand,
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_item_count_matches_entries() {
        let entries = vec![
            entry(Strand::Industrial, &["a"]),
            entry(Strand::Data, &["b", "c"]),
            entry(Strand::Industrial, &[]),
        ];
        assert_eq!(render_timeline(&entries).len(), entries.len());
    }

    #[test]
    fn test_side_is_a_function_of_strand() {
        let entries = vec![
            entry(Strand::Industrial, &[]),
            entry(Strand::Data, &[]),
            entry(Strand::Industrial, &[]),
            entry(Strand::Other, &[]),
        ];
        let fragment = render_timeline(&entries);
        let sides: Vec<&str> = fragment
            .iter()
            .filter_map(Node::as_element)
            .map(|e| e.get_attr("data-side").unwrap())
            .collect();
        assert_eq!(sides, vec!["left", "right", "left", "right"]);
        assert_eq!(side_for(Strand::Industrial), Side::Left);
        assert_eq!(side_for(Strand::Data), Side::Right);
        assert_eq!(side_for(Strand::Other), Side::Right);
    }

    #[test]
    fn test_unknown_strand_uses_neutral_bucket() {
        let fragment = render_timeline(&[entry(Strand::Other, &["x"])]);
        let html = fragment[0].to_html();
        assert!(html.contains("border-slate-500"));
        assert!(!html.contains("border-sky-500"));
    }

    #[test]
    fn test_items_are_keyed_by_index() {
        let fragment = render_timeline(&[entry(Strand::Data, &[]), entry(Strand::Data, &[])]);
        let second = fragment[1].as_element().unwrap();
        assert_eq!(second.id_attr(), Some("timeline-item-1"));
        assert_eq!(second.get_attr("data-index"), Some("1"));
    }

    #[test]
    fn test_bullets_rendered_in_order() {
        let fragment = render_timeline(&[entry(Strand::Industrial, &["first", "second"])]);
        let item = fragment[0].as_element().unwrap();
        let bullets: Vec<String> = item.find_by_tag("li").iter().map(|li| li.text_content()).collect();
        assert_eq!(bullets, vec!["first", "second"]);
    }

    #[test]
    fn test_reveal_offsets_point_outward() {
        assert_eq!(Side::Left.reveal_offset(), -100.0);
        assert_eq!(Side::Right.reveal_offset(), 100.0);
    }
}
