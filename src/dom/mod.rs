//! In-process stand-in for the DOM: an element arena addressed by stable
//! handles, mutated only through style, class, and text writes.
//!
//! The board never reads layout back out of this surface; it is a pure
//! projection target for body transforms and lifecycle styling.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Stable handle to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, Default)]
pub struct Element {
    /// DOM id attribute; equals the result item's identifier when present.
    pub dom_id: Option<String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    text: String,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Default)]
pub struct Dom {
    elements: HashMap<ElementId, Element>,
    next_id: u64,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::default());
        id
    }

    pub fn remove(&mut self, id: ElementId) {
        self.elements.remove(&id);
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn set_dom_id(&mut self, id: ElementId, dom_id: impl Into<String>) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.dom_id = Some(dom_id.into());
        }
    }

    pub fn set_style(&mut self, id: ElementId, property: &str, value: impl Into<String>) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.styles.insert(property.to_string(), value.into());
        }
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.classes.remove(class);
        }
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.text = text.into();
        }
    }
}
