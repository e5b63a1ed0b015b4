use crate::config::NavLink;
use crate::dom::{Element, Node};
use crate::render::Fragment;

const LINK_CLASS: &str =
    "flex items-center p-2 rounded-lg hover:bg-cyan-900/50 transition-colors duration-300";

/// Side navigation. The link for `active` carries `aria-current` and an
/// `active` class; everything else is identical across calls.
pub fn render_nav(links: &[NavLink], active: Option<&str>) -> Fragment {
    links
        .iter()
        .map(|link| {
            let is_active = active == Some(link.section.as_str());
            let class = if is_active {
                format!("{LINK_CLASS} active")
            } else {
                LINK_CLASS.to_string()
            };
            let mut a = Element::new("a")
                .attr("href", link.href())
                .attr("data-section", link.section.as_str())
                .class(class);
            if is_active {
                a = a.attr("aria-current", "page");
            }
            a.child(Node::Raw(link.icon.clone()))
                .child(
                    Element::new("span")
                        .class("ml-4 hidden lg:inline")
                        .text(link.text.as_str()),
                )
                .into()
        })
        .collect()
}
