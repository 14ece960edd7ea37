pub mod virtual_keys;
pub mod caret;
pub mod target;

pub use virtual_keys::*;
pub use caret::*;
pub use target::*;
