//! Key interpretation
//!
//! Given a pressed key, the modifier state and a snapshot of the active
//! field, decide what happens. The interpreter does not touch the field;
//! the widget applies the resulting [`Interpretation`].

use log::{trace, warn};

use crate::layout::EditMode;
use crate::types::{CaretRange, KeyCategory, VirtualKey};
use super::output::{EditKind, Interpretation, KeyAction, TextEdit};
use super::state::DisabledMask;
use super::utils::{char_len, splice};
use super::ModifierState;

/// Text and caret of the active field at event time
#[derive(Debug, Clone, Copy)]
pub struct FieldSnapshot<'a> {
    pub text: &'a str,
    pub caret: Option<CaretRange>,
}

impl<'a> FieldSnapshot<'a> {
    pub fn new(text: &'a str, caret: Option<CaretRange>) -> Self {
        Self { text, caret }
    }
}

/// Stateless key interpreter, configured once per widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyInterpreter {
    rewire_tab: bool,
    rewire_return: bool,
    edit_mode: EditMode,
}

impl KeyInterpreter {
    pub fn new(rewire_tab: bool, rewire_return: bool, edit_mode: EditMode) -> Self {
        Self {
            rewire_tab,
            rewire_return,
            edit_mode,
        }
    }

    /// Interprets one press. Checks run in priority order and the first
    /// match decides the outcome.
    pub fn interpret(
        &self,
        key: &VirtualKey,
        modifiers: ModifierState,
        mask: &DisabledMask,
        field: FieldSnapshot<'_>,
    ) -> Interpretation {
        let category = key.category();
        trace!("Interpreting {:?} with {:?}", category, modifiers);

        if mask.is_disabled(category, modifiers) {
            return Interpretation::new(KeyAction::Refocus, modifiers);
        }

        match category {
            KeyCategory::Disabled => Interpretation::new(KeyAction::Refocus, modifiers),
            KeyCategory::Hide => Interpretation::new(KeyAction::Hide, modifiers),
            KeyCategory::Shift => {
                Interpretation::new(KeyAction::ModifiersChanged, modifiers.toggle_shift())
            }
            KeyCategory::CapsLock => {
                Interpretation::new(KeyAction::ModifiersChanged, modifiers.toggle_caps_lock())
            }
            KeyCategory::Backspace => self.backspace(modifiers, field),
            KeyCategory::Tab if self.rewire_tab => {
                Interpretation::new(KeyAction::NextTrigger, modifiers)
            }
            KeyCategory::Tab => self.insert('\t', modifiers, field),
            KeyCategory::Return if self.rewire_return => {
                Interpretation::new(KeyAction::SubmitForm, modifiers)
            }
            KeyCategory::Return => self.insert('\n', modifiers, field),
            KeyCategory::Space => self.insert(' ', modifiers, field),
            KeyCategory::Letter => match key.glyph(modifiers.letters_uppercase()) {
                Some(ch) => self.insert(ch, modifiers, field),
                None => Interpretation::new(KeyAction::Refocus, modifiers),
            },
            KeyCategory::Digit | KeyCategory::Symbol => match key.glyph(modifiers.shift) {
                Some(ch) => self.insert(ch, modifiers, field),
                None => Interpretation::new(KeyAction::Refocus, modifiers),
            },
        }
    }

    /// Replaces the selection (or inserts at the caret) and consumes shift
    fn insert(&self, ch: char, modifiers: ModifierState, field: FieldSnapshot<'_>) -> Interpretation {
        let range = self.edit_range(field);
        let mut buf = [0u8; 4];
        let text = splice(field.text, range.start, range.end, ch.encode_utf8(&mut buf));

        let edit = TextEdit {
            text,
            caret: CaretRange::collapsed(range.start + 1),
            kind: EditKind::Insert(ch),
        };
        Interpretation::new(KeyAction::Edit(edit), modifiers.consume_shift())
    }

    fn backspace(&self, modifiers: ModifierState, field: FieldSnapshot<'_>) -> Interpretation {
        let range = self.edit_range(field);

        let (start, end) = if range.is_collapsed() {
            if range.start == 0 {
                return Interpretation::new(KeyAction::Refocus, modifiers);
            }
            (range.start - 1, range.start)
        } else {
            (range.start, range.end)
        };

        let edit = TextEdit {
            text: splice(field.text, start, end, ""),
            caret: CaretRange::collapsed(start),
            kind: EditKind::Delete,
        };
        Interpretation::new(KeyAction::Edit(edit), modifiers)
    }

    /// The range an edit applies to. Append mode and missing or malformed
    /// carets both resolve to the end of the text.
    fn edit_range(&self, field: FieldSnapshot<'_>) -> CaretRange {
        let len = char_len(field.text);
        let end_of_text = CaretRange::collapsed(len);

        if self.edit_mode == EditMode::Append {
            return end_of_text;
        }

        match field.caret {
            Some(caret) if caret.is_valid_for(len) => caret,
            Some(caret) => {
                warn!("Caret {:?} out of range for text of length {}", caret, len);
                end_of_text
            }
            None => end_of_text,
        }
    }
}
