//! Disabled-key mask and the derived key display

use crate::layout::KeyLayout;
use crate::types::{KeyCategory, TargetConfig};
use super::ModifierState;

/// Key categories disabled for the active trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisabledMask {
    symbols: bool,
    tab: bool,
    return_key: bool,
}

impl DisabledMask {
    /// A mask with every category enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether presses of `category` must be swallowed.
    ///
    /// Inert keys are always disabled. Digit keys show symbols while shift
    /// is active, so they follow the symbol flag in that state.
    pub fn is_disabled(&self, category: KeyCategory, modifiers: ModifierState) -> bool {
        match category {
            KeyCategory::Disabled => true,
            KeyCategory::Symbol => self.symbols,
            KeyCategory::Digit => self.symbols && modifiers.shift,
            KeyCategory::Tab => self.tab,
            KeyCategory::Return => self.return_key,
            _ => false,
        }
    }
}

impl From<TargetConfig> for DisabledMask {
    fn from(config: TargetConfig) -> Self {
        Self {
            symbols: config.symbols_disabled,
            tab: config.tab_disabled,
            return_key: config.return_disabled,
        }
    }
}

/// How a single key should currently be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFace {
    pub category: KeyCategory,
    /// Glyph shown on the key, if it has one
    pub glyph: Option<char>,
    pub disabled: bool,
}

/// Display state the renderer reads after every press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDisplay {
    pub letters_uppercase: bool,
    pub shifted_glyphs: bool,
    pub faces: Vec<KeyFace>,
}

impl KeyDisplay {
    pub fn compute(layout: &KeyLayout, modifiers: ModifierState, mask: &DisabledMask) -> Self {
        let letters_uppercase = modifiers.letters_uppercase();
        let shifted_glyphs = modifiers.shift;

        let faces = layout
            .keys()
            .iter()
            .map(|key| {
                let category = key.category();
                let shifted = match category {
                    KeyCategory::Letter => letters_uppercase,
                    _ => shifted_glyphs,
                };
                KeyFace {
                    category,
                    glyph: key.glyph(shifted),
                    disabled: mask.is_disabled(category, modifiers),
                }
            })
            .collect();

        Self {
            letters_uppercase,
            shifted_glyphs,
            faces,
        }
    }

    pub fn face(&self, index: usize) -> Option<&KeyFace> {
        self.faces.get(index)
    }
}
