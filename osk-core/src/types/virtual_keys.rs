/// Category tag carried by every key on the widget.
///
/// The category alone decides which branch of the interpreter handles a
/// press; glyphs only matter for the printable categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    Letter,
    Digit,
    Symbol,
    Space,
    Tab,
    Backspace,
    Return,
    Shift,
    CapsLock,
    Hide,
    /// Inert keys such as a drag handle. Never edits.
    Disabled,
}

impl KeyCategory {
    /// All categories, in the order they are documented
    pub const ALL: [KeyCategory; 11] = [
        KeyCategory::Letter,
        KeyCategory::Digit,
        KeyCategory::Symbol,
        KeyCategory::Space,
        KeyCategory::Tab,
        KeyCategory::Backspace,
        KeyCategory::Return,
        KeyCategory::Shift,
        KeyCategory::CapsLock,
        KeyCategory::Hide,
        KeyCategory::Disabled,
    ];

    /// Categories that insert a character when pressed
    pub fn is_printable(self) -> bool {
        matches!(
            self,
            KeyCategory::Letter | KeyCategory::Digit | KeyCategory::Symbol | KeyCategory::Space
        )
    }

    /// Categories whose visible glyph flips while shift is held
    pub fn has_shifted_glyph(self) -> bool {
        matches!(self, KeyCategory::Digit | KeyCategory::Symbol)
    }

    /// Canonical lowercase name, as accepted by [`KeyCategory::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            KeyCategory::Letter => "letter",
            KeyCategory::Digit => "digit",
            KeyCategory::Symbol => "symbol",
            KeyCategory::Space => "space",
            KeyCategory::Tab => "tab",
            KeyCategory::Backspace => "backspace",
            KeyCategory::Return => "return",
            KeyCategory::Shift => "shift",
            KeyCategory::CapsLock => "capslock",
            KeyCategory::Hide => "hide",
            KeyCategory::Disabled => "disabled",
        }
    }

    /// Looks up a category by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "letter" => Some(KeyCategory::Letter),
            "digit" | "number" => Some(KeyCategory::Digit),
            "symbol" => Some(KeyCategory::Symbol),
            "space" => Some(KeyCategory::Space),
            "tab" => Some(KeyCategory::Tab),
            "backspace" | "back" => Some(KeyCategory::Backspace),
            "return" | "enter" => Some(KeyCategory::Return),
            "shift" => Some(KeyCategory::Shift),
            "capslock" | "caps" => Some(KeyCategory::CapsLock),
            "hide" => Some(KeyCategory::Hide),
            "disabled" | "dragger" => Some(KeyCategory::Disabled),
            _ => None,
        }
    }
}

/// A key on the widget: its category plus, for printable keys, the glyph
/// pair `(unshifted, shifted)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualKey {
    category: KeyCategory,
    glyphs: Option<(char, char)>,
}

impl VirtualKey {
    /// Creates a key with an explicit glyph pair
    pub fn new(category: KeyCategory, glyphs: Option<(char, char)>) -> Self {
        Self { category, glyphs }
    }

    /// A letter key whose uppercase form is derived from `lower`.
    ///
    /// Characters without a single-char uppercase mapping keep themselves.
    pub fn letter(lower: char) -> Self {
        let mut upper = lower.to_uppercase();
        let shifted = match (upper.next(), upper.next()) {
            (Some(ch), None) => ch,
            _ => lower,
        };
        Self::new(KeyCategory::Letter, Some((lower, shifted)))
    }

    /// A digit key showing `unshifted`, or `shifted` while shift is active
    pub fn digit(unshifted: char, shifted: char) -> Self {
        Self::new(KeyCategory::Digit, Some((unshifted, shifted)))
    }

    /// A digit key with one glyph (numpad keys)
    pub fn numeral(ch: char) -> Self {
        Self::digit(ch, ch)
    }

    pub fn symbol(unshifted: char, shifted: char) -> Self {
        Self::new(KeyCategory::Symbol, Some((unshifted, shifted)))
    }

    /// A key that carries no glyph (space, tab, shift, ...)
    pub fn control(category: KeyCategory) -> Self {
        Self::new(category, None)
    }

    pub fn category(&self) -> KeyCategory {
        self.category
    }

    pub fn glyphs(&self) -> Option<(char, char)> {
        self.glyphs
    }

    /// Gets the glyph for the requested shift level
    pub fn glyph(&self, shifted: bool) -> Option<char> {
        self.glyphs
            .map(|(unshifted, shifted_glyph)| if shifted { shifted_glyph } else { unshifted })
    }
}
