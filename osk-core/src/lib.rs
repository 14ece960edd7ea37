pub mod types;
pub mod error;
pub mod options;
pub mod layout;
pub mod engine;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use options::{Language, WidgetOptions};
pub use layout::{EditMode, KeyLayout};
pub use engine::{EventResult, MemoryField, ModifierState, Surface, TextField, TriggerId, Widget};
