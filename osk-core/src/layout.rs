//! Key layouts
//!
//! A layout is plain data: an ordered list of keys plus the edit mode the
//! interpreter uses for it. The full keyboard and the numeric keypad are
//! both just layouts driving the same interpreter.

use crate::error::{Error, Result};
use crate::options::Language;
use crate::types::{KeyCategory, VirtualKey};

/// How printable keys and backspace address the field's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Insert and delete at the caret, replacing any selection
    #[default]
    Caret,
    /// Always append at the end; backspace drops the trailing character
    Append,
}

/// Ordered set of keys shown by a widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    keys: Vec<VirtualKey>,
    edit_mode: EditMode,
}

impl KeyLayout {
    pub fn new(keys: Vec<VirtualKey>, edit_mode: EditMode) -> Result<Self> {
        if keys.is_empty() {
            return Err(Error::EmptyLayout);
        }
        Ok(Self { keys, edit_mode })
    }

    /// The full QWERTY keyboard
    pub fn keyboard(language: Language) -> Self {
        use KeyCategory::*;

        let mut keys = vec![
            VirtualKey::symbol('´', '#'),
            VirtualKey::digit('1', '!'),
            VirtualKey::digit('2', '"'),
            VirtualKey::digit('3', '£'),
            VirtualKey::digit('4', '$'),
            VirtualKey::digit('5', '%'),
            VirtualKey::digit('6', '^'),
            VirtualKey::digit('7', '&'),
            VirtualKey::digit('8', '*'),
            VirtualKey::digit('9', '('),
            VirtualKey::digit('0', ')'),
            VirtualKey::symbol('-', '_'),
            VirtualKey::symbol('=', '+'),
            VirtualKey::control(Backspace),
            VirtualKey::control(Tab),
        ];
        keys.extend("qwertyuiop".chars().map(VirtualKey::letter));
        keys.extend([
            VirtualKey::symbol('[', '{'),
            VirtualKey::symbol(']', '}'),
            VirtualKey::symbol('\\', '|'),
            VirtualKey::control(CapsLock),
        ]);
        keys.extend("asdfghjkl".chars().map(VirtualKey::letter));
        keys.push(match language {
            Language::En => VirtualKey::symbol(';', ':'),
            Language::Es => VirtualKey::letter('ñ'),
        });
        keys.extend([
            VirtualKey::symbol('\'', '@'),
            VirtualKey::control(Return),
            VirtualKey::control(Shift),
        ]);
        keys.extend("zxcvbnm".chars().map(VirtualKey::letter));
        keys.extend([
            VirtualKey::symbol(',', '<'),
            VirtualKey::symbol('.', '>'),
            VirtualKey::symbol('/', '?'),
            VirtualKey::control(Hide),
            VirtualKey::control(Space),
        ]);

        Self {
            keys,
            edit_mode: EditMode::Caret,
        }
    }

    /// The numeric keypad. Appends at the end of the field.
    pub fn numpad() -> Self {
        use KeyCategory::*;

        let keys = vec![
            VirtualKey::control(Disabled),
            VirtualKey::numeral('1'),
            VirtualKey::numeral('2'),
            VirtualKey::numeral('3'),
            VirtualKey::control(Backspace),
            VirtualKey::numeral('4'),
            VirtualKey::numeral('5'),
            VirtualKey::numeral('6'),
            VirtualKey::control(Hide),
            VirtualKey::numeral('7'),
            VirtualKey::numeral('8'),
            VirtualKey::numeral('9'),
            VirtualKey::numeral('0'),
            VirtualKey::numeral('.'),
        ];

        Self {
            keys,
            edit_mode: EditMode::Append,
        }
    }

    /// Parse a layout description, one key per line.
    ///
    /// ```text
    /// # comment lines start with a hash
    /// mode caret
    /// digit 1 !
    /// letter q
    /// symbol - _
    /// backspace
    /// ```
    ///
    /// # Examples
    /// ```
    /// use osk_core::layout::{EditMode, KeyLayout};
    ///
    /// let layout = KeyLayout::parse("mode append\nnumber 1\nbackspace").unwrap();
    /// assert_eq!(layout.len(), 2);
    /// assert_eq!(layout.edit_mode(), EditMode::Append);
    /// ```
    pub fn parse(description: &str) -> Result<Self> {
        let mut keys = Vec::new();
        let mut edit_mode = EditMode::Caret;

        for (index, raw) in description.lines().enumerate() {
            let line = index + 1;
            let content = raw.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = content.split_whitespace().collect();
            if parts[0].eq_ignore_ascii_case("mode") {
                edit_mode = parse_mode(&parts[1..], line)?;
                continue;
            }

            keys.push(parse_key(&parts, line)?);
        }

        Self::new(keys, edit_mode)
    }

    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    pub fn key(&self, index: usize) -> Option<&VirtualKey> {
        self.keys.get(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    /// Index of the first key of `category`
    pub fn position(&self, category: KeyCategory) -> Option<usize> {
        self.keys.iter().position(|k| k.category() == category)
    }

    /// Index of the printable key whose unshifted glyph is `glyph`
    pub fn position_of_glyph(&self, glyph: char) -> Option<usize> {
        self.keys
            .iter()
            .position(|k| k.category().is_printable() && k.glyph(false) == Some(glyph))
    }
}

fn parse_mode(parts: &[&str], line: usize) -> Result<EditMode> {
    match parts {
        [mode] if mode.eq_ignore_ascii_case("caret") => Ok(EditMode::Caret),
        [mode] if mode.eq_ignore_ascii_case("append") => Ok(EditMode::Append),
        _ => Err(parse_error(line, format!("Invalid mode: {:?}", parts.join(" ")))),
    }
}

fn parse_key(parts: &[&str], line: usize) -> Result<VirtualKey> {
    let category = KeyCategory::from_name(parts[0])
        .ok_or_else(|| parse_error(line, format!("Unknown key category: {}", parts[0])))?;

    let glyphs = parts[1..]
        .iter()
        .map(|g| parse_glyph(g, line))
        .collect::<Result<Vec<char>>>()?;

    match (category, glyphs.as_slice()) {
        (KeyCategory::Letter, [lower]) => Ok(VirtualKey::letter(*lower)),
        (KeyCategory::Digit, [glyph]) => Ok(VirtualKey::numeral(*glyph)),
        (KeyCategory::Letter | KeyCategory::Digit | KeyCategory::Symbol, [unshifted, shifted]) => {
            Ok(VirtualKey::new(category, Some((*unshifted, *shifted))))
        }
        (KeyCategory::Letter | KeyCategory::Digit | KeyCategory::Symbol, _) => Err(parse_error(
            line,
            format!("{} key needs glyphs, got {}", category.name(), glyphs.len()),
        )),
        (_, []) => Ok(VirtualKey::control(category)),
        (_, _) => Err(parse_error(
            line,
            format!("{} key takes no glyphs", category.name()),
        )),
    }
}

fn parse_glyph(token: &str, line: usize) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(parse_error(line, format!("Glyph must be one character: {:?}", token))),
    }
}

fn parse_error(line: usize, message: String) -> Error {
    Error::LayoutParse { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(layout: &KeyLayout, category: KeyCategory) -> usize {
        layout.keys().iter().filter(|k| k.category() == category).count()
    }

    #[test]
    fn test_keyboard_layout_shape() {
        let layout = KeyLayout::keyboard(Language::En);
        assert_eq!(layout.len(), 54);
        assert_eq!(count(&layout, KeyCategory::Letter), 26);
        assert_eq!(count(&layout, KeyCategory::Digit), 10);
        assert_eq!(count(&layout, KeyCategory::Symbol), 11);
        assert_eq!(layout.edit_mode(), EditMode::Caret);
        for category in [
            KeyCategory::Space,
            KeyCategory::Tab,
            KeyCategory::Backspace,
            KeyCategory::Return,
            KeyCategory::Shift,
            KeyCategory::CapsLock,
            KeyCategory::Hide,
        ] {
            assert_eq!(count(&layout, category), 1, "{:?}", category);
        }
    }

    #[test]
    fn test_spanish_layout_swaps_semicolon_for_enye() {
        let en = KeyLayout::keyboard(Language::En);
        let es = KeyLayout::keyboard(Language::Es);

        assert!(en.position_of_glyph(';').is_some());
        assert!(en.position_of_glyph('ñ').is_none());

        let enye = es.position_of_glyph('ñ').unwrap();
        assert_eq!(es.key(enye), Some(&VirtualKey::letter('ñ')));
        assert_eq!(Some(enye), en.position_of_glyph(';'));
        assert_eq!(count(&es, KeyCategory::Letter), 27);
    }

    #[test]
    fn test_numpad_layout() {
        let layout = KeyLayout::numpad();
        assert_eq!(layout.edit_mode(), EditMode::Append);
        assert_eq!(count(&layout, KeyCategory::Digit), 11);
        assert_eq!(layout.key(0).map(|k| k.category()), Some(KeyCategory::Disabled));
        assert!(layout.position(KeyCategory::Shift).is_none());
        assert_eq!(layout.position_of_glyph('.'), Some(13));
    }

    #[test]
    fn test_parse_description() {
        let layout = KeyLayout::parse(
            "# tiny layout\n\
             mode append\n\
             \n\
             DIGIT 1 !\n\
             letter q\n\
             symbol - _\n\
             symbol ´ #\n\
             enter\n",
        )
        .unwrap();

        assert_eq!(layout.edit_mode(), EditMode::Append);
        assert_eq!(
            layout.keys(),
            &[
                VirtualKey::digit('1', '!'),
                VirtualKey::letter('q'),
                VirtualKey::symbol('-', '_'),
                VirtualKey::symbol('´', '#'),
                VirtualKey::control(KeyCategory::Return),
            ]
        );
    }

    #[test]
    fn test_parse_errors_report_line() {
        let err = KeyLayout::parse("letter a\nmeta").unwrap_err();
        assert!(matches!(err, Error::LayoutParse { line: 2, .. }));

        let err = KeyLayout::parse("symbol -").unwrap_err();
        assert!(matches!(err, Error::LayoutParse { line: 1, .. }));

        let err = KeyLayout::parse("space x").unwrap_err();
        assert!(matches!(err, Error::LayoutParse { line: 1, .. }));

        let err = KeyLayout::parse("letter ab").unwrap_err();
        assert!(matches!(err, Error::LayoutParse { line: 1, .. }));

        let err = KeyLayout::parse("letter a\n\nmode sideways").unwrap_err();
        assert!(matches!(err, Error::LayoutParse { line: 3, .. }));
    }

    #[test]
    fn test_parse_empty_layout() {
        assert!(matches!(KeyLayout::parse("# nothing\n"), Err(Error::EmptyLayout)));
    }
}
