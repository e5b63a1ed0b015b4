use crate::dom::Element;
use crate::models::ALL_SKILLS;
use crate::render::Fragment;

/// Filter buttons: `All` followed by each category in first-seen order.
pub fn render_skill_filters(categories: &[&str], active: &str) -> Fragment {
    std::iter::once(ALL_SKILLS)
        .chain(categories.iter().copied())
        .map(|cat| {
            let mut class =
                "skill-filter-btn glass-panel px-3 py-1 md:px-4 md:py-2 rounded-full text-sm"
                    .to_string();
            if cat == active {
                class.push_str(" active");
            }
            Element::new("button")
                .attr("data-category", cat)
                .class(class)
                .text(cat)
                .into()
        })
        .collect()
}

/// What the skill tooltip shows, if anything.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipView {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Tooltip content. Position and visibility are styles on the mount itself,
/// applied by the caller.
pub fn render_skill_tooltip(view: Option<&TooltipView>) -> Fragment {
    match view {
        Some(v) => vec![v.name.as_str().into()],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Node;

    #[test]
    fn test_all_filter_comes_first() {
        let fragment = render_skill_filters(&["Engineering", "Data Science"], "All");
        let cats: Vec<&str> = fragment
            .iter()
            .filter_map(Node::as_element)
            .map(|b| b.get_attr("data-category").unwrap())
            .collect();
        assert_eq!(cats, vec!["All", "Engineering", "Data Science"]);
    }

    #[test]
    fn test_active_filter_is_marked() {
        let fragment = render_skill_filters(&["Engineering"], "Engineering");
        let active: Vec<_> = fragment
            .iter()
            .filter_map(Node::as_element)
            .filter(|b| b.has_class("active"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text_content(), "Engineering");
    }

    #[test]
    fn test_no_categories_still_offers_all() {
        assert_eq!(render_skill_filters(&[], "All").len(), 1);
    }

    #[test]
    fn test_tooltip_content() {
        let view = TooltipView {
            name: "Rust".to_string(),
            x: 10.0,
            y: 20.0,
        };
        assert_eq!(render_skill_tooltip(Some(&view)), vec![Node::text("Rust")]);
        assert!(render_skill_tooltip(None).is_empty());
    }
}
