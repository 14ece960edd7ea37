//! The text-field capability the widget edits through

use crate::types::CaretRange;
use super::utils::char_len;

/// A text input the widget can drive.
///
/// Hosts implement this over their real UI element; [`MemoryField`] is the
/// in-memory version.
pub trait TextField {
    fn text(&self) -> String;

    fn set_text(&mut self, text: String);

    /// The live caret, or `None` when the element cannot report one
    fn caret(&self) -> Option<CaretRange>;

    fn set_caret(&mut self, caret: CaretRange);

    fn focus(&mut self);

    fn blur(&mut self);

    /// Tells external listeners the value changed
    fn notify_changed(&mut self);

    /// Adds or removes the "focused" marker shown on the trigger
    fn set_focused_marker(&mut self, marked: bool);
}

/// In-memory text field that records what the widget did to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    text: String,
    caret: Option<CaretRange>,
    focused: bool,
    marked: bool,
    changes: usize,
}

impl MemoryField {
    /// A field holding `text` with the caret at its end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = Some(CaretRange::collapsed(char_len(&text)));
        Self {
            text,
            caret,
            ..Self::default()
        }
    }

    /// A field that reports no caret at all
    pub fn without_caret(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_caret(mut self, caret: CaretRange) -> Self {
        self.caret = Some(caret);
        self
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn current_caret(&self) -> Option<CaretRange> {
        self.caret
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// Number of "value changed" notifications received
    pub fn change_count(&self) -> usize {
        self.changes
    }
}

impl TextField for MemoryField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn caret(&self) -> Option<CaretRange> {
        self.caret
    }

    fn set_caret(&mut self, caret: CaretRange) {
        self.caret = Some(caret);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn notify_changed(&mut self) {
        self.changes += 1;
    }

    fn set_focused_marker(&mut self, marked: bool) {
        self.marked = marked;
    }
}
