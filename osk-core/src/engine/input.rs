//! Modifier state for the on-screen keyboard

/// State of the widget's modifier keys.
///
/// The two flags are independent. Shift is a one-shot consumed by the next
/// printable key; caps-lock persists until pressed again. Pressing shift
/// clears caps-lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    pub caps_lock: bool,
}

impl ModifierState {
    /// Creates a modifier state with nothing active
    pub fn new() -> Self {
        Self::default()
    }

    /// State after pressing the shift key
    pub fn toggle_shift(self) -> Self {
        Self {
            shift: !self.shift,
            caps_lock: false,
        }
    }

    /// State after pressing the caps-lock key
    pub fn toggle_caps_lock(self) -> Self {
        Self {
            caps_lock: !self.caps_lock,
            ..self
        }
    }

    /// State after a printable key consumed the one-shot shift
    pub fn consume_shift(self) -> Self {
        Self {
            shift: false,
            ..self
        }
    }

    /// Whether letter keys currently produce (and show) uppercase
    pub fn letters_uppercase(&self) -> bool {
        self.shift || self.caps_lock
    }

    /// Checks if any modifier is active
    pub fn any(&self) -> bool {
        self.shift || self.caps_lock
    }
}
