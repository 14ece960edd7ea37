//! Output representation for the key interpreter

use crate::types::CaretRange;
use super::ModifierState;

/// What the host UI should do with its own default handling of the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; the default action may proceed
    Handled,
    /// Handled; the host must cancel the default action
    HandledSuppressDefault,
}

/// New contents of the active field after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub text: String,
    pub caret: CaretRange,
    pub kind: EditKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert(char),
    Delete,
}

/// Types of actions the interpreter can output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing to apply; give focus back to the active field
    Refocus,
    /// Close the widget surface
    Hide,
    /// Only the modifier state changed
    ModifiersChanged,
    /// Replace the field's text and caret
    Edit(TextEdit),
    /// Move to the next trigger (rewired tab)
    NextTrigger,
    /// Submit the enclosing form (rewired return)
    SubmitForm,
}

/// Result of interpreting one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub action: KeyAction,
    pub modifiers: ModifierState,
}

impl Interpretation {
    pub fn new(action: KeyAction, modifiers: ModifierState) -> Self {
        Self { action, modifiers }
    }

    /// Character insertions let the default proceed; everything else is
    /// swallowed.
    pub fn event_result(&self) -> EventResult {
        match &self.action {
            KeyAction::Edit(TextEdit {
                kind: EditKind::Insert(_),
                ..
            }) => EventResult::Handled,
            _ => EventResult::HandledSuppressDefault,
        }
    }

    /// The edit, if this press changes the field's text
    pub fn edit(&self) -> Option<&TextEdit> {
        match &self.action {
            KeyAction::Edit(edit) => Some(edit),
            _ => None,
        }
    }
}
