//! The presentation layer as seen from the core

/// Callbacks into whatever draws the widget.
///
/// Every method defaults to doing nothing.
pub trait Surface {
    fn show(&mut self) {}

    fn hide(&mut self) {}

    /// Submit the form enclosing the triggers (rewired return)
    fn submit_form(&mut self) {}

    /// Remove the widget from the UI for good
    fn destroy(&mut self) {}
}

/// A surface that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {}
