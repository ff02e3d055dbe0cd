//! Immutable line handles.
//!
//! A [`Line`] wraps a byte string (including its trailing terminator, if
//! any) behind an `Rc`. Once allocated a line's bytes never change; the
//! handle is cheap to clone and safe to hold from multiple owners at once
//! (a [`crate::Buffer`] slot, a command's recorded payload, a snapshot).

use std::rc::Rc;

/// A single line of text, stored as an opaque, immutable byte string.
///
/// No encoding or normalization is assumed or enforced; lines are treated
/// as raw bytes end to end.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line(Rc<[u8]>);

impl Line {
    fn new(bytes: Vec<u8>) -> Self {
        Line(Rc::from(bytes.into_boxed_slice()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Allocates [`Line`] handles.
///
/// The store does not track or evict individual lines: every handle it
/// hands out is reference-counted, and the last owner dropping it is what
/// actually frees the bytes. `LineStore` exists as the single allocation
/// point so call sites never construct a `Line` directly, and so the
/// total-allocated count is available for diagnostics.
#[derive(Default)]
pub struct LineStore {
    allocated: std::cell::Cell<u64>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&self, bytes: Vec<u8>) -> Line {
        self.allocated.set(self.allocated.get() + 1);
        Line::new(bytes)
    }

    pub fn allocated_count(&self) -> u64 {
        self.allocated.get()
    }
}
