//! Widget engine - input routing and key interpretation
//!
//! [`Widget`] owns the per-instance state and routes each press through
//! the [`InputBinder`] and the [`KeyInterpreter`].

mod binder;
mod engine;
mod field;
mod input;
mod interpreter;
mod output;
mod state;
mod surface;
mod utils;

pub use binder::{InputBinder, Trigger, TriggerId};
pub use engine::Widget;
pub use field::{MemoryField, TextField};
pub use input::ModifierState;
pub use interpreter::{FieldSnapshot, KeyInterpreter};
pub use output::{EditKind, EventResult, Interpretation, KeyAction, TextEdit};
pub use state::{DisabledMask, KeyDisplay, KeyFace};
pub use surface::{NullSurface, Surface};
