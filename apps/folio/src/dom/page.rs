//! The in-memory page: a root element with named mount points.
//!
//! Every successful mutation bumps `mutations`, which lets callers assert
//! that an event changed nothing.

use tracing::debug;

use crate::dom::{Element, Node};
use crate::errors::AppError;
use crate::models::Theme;

#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    root_class: String,
    body: Element,
    mutations: u64,
}

impl Page {
    pub fn new(title: impl Into<String>, body: Element) -> Self {
        Self {
            title: title.into(),
            root_class: Theme::default().as_str().to_string(),
            body,
            mutations: 0,
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, AppError> {
        self.body
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::MissingMount(id.to_string()))
    }

    /// Replaces the children of mount point `id` with `fragment`.
    pub fn mount(&mut self, id: &str, fragment: Vec<Node>) -> Result<(), AppError> {
        let el = self.get_mut(id)?;
        el.children = fragment;
        self.mutations += 1;
        debug!(mount = id, "Mounted fragment");
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> Result<(), AppError> {
        let el = self.get_mut(id)?;
        el.children = vec![Node::text(text)];
        self.mutations += 1;
        Ok(())
    }

    pub fn set_style(&mut self, id: &str, property: &str, value: &str) -> Result<(), AppError> {
        let el = self.get_mut(id)?;
        el.set_style(property, value);
        self.mutations += 1;
        Ok(())
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: &str) -> Result<(), AppError> {
        let el = self.get_mut(id)?;
        el.set_attr(name, value);
        self.mutations += 1;
        Ok(())
    }

    /// Adds or removes a class; counts as a mutation only if the list changed.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> Result<(), AppError> {
        let el = self.get_mut(id)?;
        if el.toggle_class(class, on) {
            self.mutations += 1;
        }
        Ok(())
    }

    /// Sets the class on the document root (the theme switch).
    pub fn set_root_class(&mut self, class: &str) {
        if self.root_class != class {
            self.root_class = class.to_string();
            self.mutations += 1;
        }
    }

    /// Throws away the whole body, used for the full-viewport error state.
    pub fn replace_body(&mut self, body: Element) {
        self.body = body;
        self.mutations += 1;
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\" class=\"{}\"><head><meta charset=\"utf-8\"><title>{}</title></head>{}</html>\n",
            self.root_class,
            Node::text(self.title.as_str()).to_html(),
            self.body.to_html()
        )
    }
}
