//! Typed UI fragments.
//!
//! A fragment is a tree of `Node`s built by the renderer. Serialization is
//! deterministic: attributes keep insertion order and all text is escaped,
//! so the same input always yields the same HTML.

pub mod page;

pub use page::Page;

use std::fmt::Write;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Trusted markup emitted verbatim (inline SVG icons).
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(&name.into(), value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ── attribute access ────────────────────────────────────────────────────

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn id_attr(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Adds or removes one class, leaving the others in place.
    /// Returns true when the class list actually changed.
    pub fn toggle_class(&mut self, class: &str, on: bool) -> bool {
        if self.has_class(class) == on {
            return false;
        }
        let current = self.get_attr("class").unwrap_or("").to_string();
        let mut classes: Vec<&str> = current.split_whitespace().collect();
        if on {
            classes.push(class);
        } else {
            classes.retain(|c| *c != class);
        }
        if classes.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", classes.join(" "));
        }
        true
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.get_attr("style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(k, _)| k.trim() == property)
            .map(|(_, v)| v.trim())
    }

    /// Sets one inline style property, keeping declaration order stable.
    pub fn set_style(&mut self, property: &str, value: &str) {
        let current = self.get_attr("style").unwrap_or("").to_string();
        let mut decls: Vec<(String, String)> = current
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        match decls.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => decls.push((property.to_string(), value.to_string())),
        }
        let style = decls
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attr("style", style);
    }

    // ── queries ─────────────────────────────────────────────────────────────

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id_attr() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id_attr() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            Node::Element(e) => e.find_by_id_mut(id),
            _ => None,
        })
    }

    /// All descendant elements (depth-first, document order) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_by_class(class, &mut out);
        out
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.has_class(class) {
                out.push(child);
            }
            child.collect_by_class(class, out);
        }
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_by_tag(tag, &mut out);
        out
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_by_tag(tag, out);
        }
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
                Node::Raw(_) => {}
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.write_html(out),
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
