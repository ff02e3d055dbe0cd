//! The append-only log of committed commands, plus the pending
//! undo/redo displacement that has not yet been applied to the buffer.

use crate::command::Command;

/// Tracks every command ever committed and how far the "commit frontier"
/// (`committed_length`) currently sits from the end of that history.
///
/// Commands past the frontier form a redo tail; a new `c`/`d` discards
/// that tail (see [`CommandLog::push`]). Rather than maintaining a manual
/// free-list of reclaimable slots the way the original C implementation
/// did, this implementation just lets `Vec::truncate` drop the discarded
/// `Command` values. Rust's allocator already gives us the equivalent of
/// reclaim-on-demand, so a hand-rolled pool would only add bookkeeping
/// without changing observable behavior. `reclaimed_total` is kept purely
/// as a diagnostic counter mirroring that history.
#[derive(Default)]
pub struct CommandLog {
    commands: Vec<Command>,
    committed_length: usize,
    pending_undo: i64,
    reclaimed_total: u64,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_length(&self) -> usize {
        self.commands.len()
    }

    pub fn committed_length(&self) -> usize {
        self.committed_length
    }

    pub fn pending_undo(&self) -> i64 {
        self.pending_undo
    }

    pub fn reclaimed_total(&self) -> u64 {
        self.reclaimed_total
    }

    /// 0-based access into the full history (committed and redo tail).
    pub fn command_at(&self, idx: usize) -> &Command {
        &self.commands[idx]
    }

    /// Discards any commands past the commit frontier, then appends
    /// `cmd` and advances the frontier past it. Resets `pending_undo` to
    /// zero, matching the "new mutation clears the queue" rule.
    pub fn push(&mut self, cmd: Command) {
        self.truncate_redo_tail();
        self.commands.push(cmd);
        self.committed_length += 1;
        self.pending_undo = 0;
    }

    fn truncate_redo_tail(&mut self) {
        if self.commands.len() > self.committed_length {
            self.reclaimed_total += (self.commands.len() - self.committed_length) as u64;
            self.commands.truncate(self.committed_length);
        }
    }

    /// Moves the commit frontier by `delta` (positive advances past more
    /// commands, i.e. a redo step; negative retreats, i.e. an undo step).
    pub fn advance_committed(&mut self, delta: i64) {
        let new = self.committed_length as i64 + delta;
        debug_assert!(new >= 0 && new as usize <= self.commands.len());
        self.committed_length = new.clamp(0, self.commands.len() as i64) as usize;
    }

    pub fn set_committed(&mut self, value: usize) {
        debug_assert!(value <= self.commands.len());
        self.committed_length = value.min(self.commands.len());
    }

    /// Adds `delta` to the pending undo/redo counter, clamped to
    /// `[committed_length - total_length, committed_length]` so it can
    /// never ask to undo past the start of history or redo past its end.
    pub fn adjust_pending(&mut self, delta: i64) {
        let total = self.commands.len() as i64;
        let committed = self.committed_length as i64;
        let lo = committed - total;
        let hi = committed;
        self.pending_undo = (self.pending_undo + delta).clamp(lo, hi);
    }

    /// Reads and resets the pending displacement in one step.
    pub fn take_pending(&mut self) -> i64 {
        std::mem::take(&mut self.pending_undo)
    }
}
