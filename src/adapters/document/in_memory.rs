//! In-memory document.
//!
//! Element surface used by tests and local demos in place of a real page:
//! a map of element ids to their input value and text content.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::Document;

#[derive(Debug, Clone, Default)]
struct Element {
    value: String,
    text: String,
}

/// Document backed by a process-local element map.
#[derive(Default)]
pub struct InMemoryDocument {
    elements: Mutex<HashMap<String, Element>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input element with the given value.
    pub fn with_input(self, element_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.elements.lock().unwrap().insert(
            element_id.into(),
            Element {
                value: value.into(),
                text: String::new(),
            },
        );
        self
    }

    /// Adds an empty output element.
    pub fn with_element(self, element_id: impl Into<String>) -> Self {
        self.elements
            .lock()
            .unwrap()
            .insert(element_id.into(), Element::default());
        self
    }

    /// The element's current text, or `None` if it does not exist.
    pub fn text_of(&self, element_id: &str) -> Option<String> {
        self.elements
            .lock()
            .unwrap()
            .get(element_id)
            .map(|e| e.text.clone())
    }
}

impl Document for InMemoryDocument {
    fn contains(&self, element_id: &str) -> bool {
        self.elements.lock().unwrap().contains_key(element_id)
    }

    fn input_value(&self, element_id: &str) -> Option<String> {
        self.elements
            .lock()
            .unwrap()
            .get(element_id)
            .map(|e| e.value.clone())
    }

    fn set_text(&self, element_id: &str, text: &str) {
        if let Some(element) = self.elements.lock().unwrap().get_mut(element_id) {
            element.text = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_value_reflects_fixture() {
        let page = InMemoryDocument::new().with_input("input", "hello");
        assert_eq!(page.input_value("input").as_deref(), Some("hello"));
        assert_eq!(page.input_value("missing"), None);
    }

    #[test]
    fn set_text_updates_existing_elements_only() {
        let page = InMemoryDocument::new().with_element("output");

        page.set_text("output", "written");
        page.set_text("missing", "dropped");

        assert_eq!(page.text_of("output").as_deref(), Some("written"));
        assert_eq!(page.text_of("missing"), None);
    }

    #[test]
    fn contains_tracks_fixture_elements() {
        let page = InMemoryDocument::new().with_element("output");
        assert!(page.contains("output"));
        assert!(!page.contains("missing"));
    }
}
