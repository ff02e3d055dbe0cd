//! The current document: an ordered sequence of [`Line`] handles.
//!
//! Positions are 1-based everywhere in this module's public API, matching
//! the addressing convention used by the rest of the editor. Internally
//! the backing `Vec` is 0-based, so every public method subtracts one
//! before indexing.

use crate::Line;

/// The live document, as a flat sequence of line handles.
///
/// `Buffer` has no notion of undo, commands, or history; it only knows how
/// to hold lines and answer queries about them. Higher layers (see
/// `ed-state`) record how to reverse a mutation before applying it here.
#[derive(Clone, Default)]
pub struct Buffer {
    lines: Vec<Line>,
}

impl Buffer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Number of lines currently in the buffer.
    pub fn length(&self) -> usize {
        self.lines.len()
    }

    /// Returns the line at 1-based position `pos`.
    ///
    /// Panics if `pos` is out of `[1, length()]`; callers are expected to
    /// have already clipped addresses to the buffer's current length.
    pub fn get(&self, pos: usize) -> &Line {
        &self.lines[pos - 1]
    }

    /// Replaces the line at 1-based position `pos`, returning the
    /// previous handle.
    pub fn overwrite(&mut self, pos: usize, line: Line) -> Line {
        std::mem::replace(&mut self.lines[pos - 1], line)
    }

    /// Appends a line to the end of the buffer.
    pub fn append(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Removes the inclusive 1-based range `[lo, hi]`, returning the
    /// removed handles in order. `lo` and `hi` must already be clipped to
    /// `[1, length()]` with `lo <= hi`.
    pub fn remove_range(&mut self, lo: usize, hi: usize) -> Vec<Line> {
        self.lines.drain(lo - 1..hi).collect()
    }

    /// Inserts `lines` before 1-based position `pos`, shifting the
    /// remainder of the buffer right. The inverse of [`Buffer::remove_range`].
    pub fn insert_range(&mut self, pos: usize, lines: Vec<Line>) {
        let idx = pos - 1;
        self.lines.splice(idx..idx, lines);
    }

    /// Truncates the buffer to its first `len` lines.
    pub fn truncate(&mut self, len: usize) {
        self.lines.truncate(len);
    }

    /// Replaces the entire contents of the buffer.
    pub fn bulk_replace(&mut self, lines: Vec<Line>) {
        self.lines = lines;
    }

    /// Returns a snapshot-able copy of the current line sequence.
    ///
    /// Cloning only duplicates the `Rc` handles, not the underlying bytes.
    pub fn snapshot_lines(&self) -> Vec<Line> {
        self.lines.clone()
    }
}
