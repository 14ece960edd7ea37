/// Caret or selection inside a text field, in character offsets.
///
/// Valid ranges satisfy `start <= end <= len(text)`. A collapsed range
/// (`start == end`) is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretRange {
    pub start: usize,
    pub end: usize,
}

impl CaretRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A caret with no selection
    pub fn collapsed(position: usize) -> Self {
        Self::new(position, position)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Checks the range against a text of `len` characters
    pub fn is_valid_for(&self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        assert!(CaretRange::new(0, 0).is_valid_for(0));
        assert!(CaretRange::new(2, 5).is_valid_for(5));
        assert!(!CaretRange::new(2, 6).is_valid_for(5));
        assert!(!CaretRange::new(3, 2).is_valid_for(5));
    }

    #[test]
    fn test_collapsed() {
        assert!(CaretRange::collapsed(4).is_collapsed());
        assert!(!CaretRange::new(1, 4).is_collapsed());
    }
}
