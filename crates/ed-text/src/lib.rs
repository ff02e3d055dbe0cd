//! Line storage and the live document buffer.
//!
//! This crate has no notion of commands, undo, or snapshots; it is the
//! bottom layer that the rest of the editor (see `ed-state`) builds on.

mod buffer;
mod line;

pub use buffer::Buffer;
pub use line::{Line, LineStore};
