use crate::dom::Element;
use crate::models::Project;
use crate::render::Fragment;

fn external_link(href: &str, class: &str, label: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .class(class)
        .text(label)
}

pub fn render_projects(projects: &[Project]) -> Fragment {
    projects
        .iter()
        .map(|p| {
            Element::new("div")
                .class("glass-panel rounded-lg overflow-hidden group flex flex-col")
                .child(
                    Element::new("div")
                        .class("p-6 flex-grow")
                        .child(
                            Element::new("h3")
                                .class("font-orbitron text-2xl font-bold text-cyan-400")
                                .text(p.name.as_str()),
                        )
                        .child(
                            Element::new("p")
                                .class("text-slate-400 mt-2 h-12")
                                .text(p.description.as_str()),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("flex space-x-4 p-6 pt-0")
                        .child(external_link(
                            &p.code_url,
                            "flex-1 text-center bg-gray-700 text-white py-2 px-4 rounded-md hover:bg-gray-600 transition-colors",
                            "Code ↗",
                        ))
                        .child(external_link(
                            &p.live_url,
                            "flex-1 text-center bg-cyan-500 text-gray-900 font-bold py-2 px-4 rounded-md hover:bg-cyan-400 transition-colors",
                            "Live App ↗",
                        )),
                )
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_code_and_live_links() {
        let projects = vec![Project {
            name: "Folio".to_string(),
            description: "Résumé site".to_string(),
            code_url: "https://code".to_string(),
            live_url: "https://live".to_string(),
        }];
        let fragment = render_projects(&projects);
        let card = fragment[0].as_element().unwrap();
        let links = card.find_by_tag("a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].get_attr("href"), Some("https://code"));
        assert_eq!(links[1].get_attr("href"), Some("https://live"));
        assert_eq!(links[1].get_attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn test_empty_projects_render_nothing() {
        assert!(render_projects(&[]).is_empty());
    }
}
