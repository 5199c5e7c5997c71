//! Document port - the element surface UI handlers read and write.
//!
//! Models the page the handlers run against: elements addressed by id, an
//! input value to read, a text slot to write. The real surface (a browser
//! DOM) is outside this crate; tests use the in-memory adapter.

/// Port for the UI element surface.
pub trait Document: Send + Sync {
    /// Whether an element with this id exists.
    fn contains(&self, element_id: &str) -> bool;

    /// The current input value of the element, or `None` if the element
    /// does not exist.
    fn input_value(&self, element_id: &str) -> Option<String>;

    /// Replaces the element's text. Writes to a missing element are dropped.
    fn set_text(&self, element_id: &str, text: &str);
}
