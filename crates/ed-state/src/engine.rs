//! Ties the buffer, command log, and snapshot store together into the
//! editor's five observable operations: change, delete, print, undo, redo.

use std::io::{self, Write};

use ed_text::{Buffer, LineStore};
use tracing::trace;

use crate::command::Command;
use crate::log::CommandLog;
use crate::snapshot::SnapshotStore;

/// The whole mutable state of one editing session.
pub struct Engine {
    line_store: LineStore,
    buffer: Buffer,
    log: CommandLog,
    snapshots: SnapshotStore,
}

impl Engine {
    pub fn new(snapshot_interval: usize) -> Self {
        Self {
            line_store: LineStore::new(),
            buffer: Buffer::new(),
            log: CommandLog::new(),
            snapshots: SnapshotStore::new(snapshot_interval),
        }
    }

    pub fn buffer_length(&self) -> usize {
        self.buffer.length()
    }

    pub fn committed_length(&self) -> usize {
        self.log.committed_length()
    }

    pub fn total_length(&self) -> usize {
        self.log.total_length()
    }

    pub fn pending_undo(&self) -> i64 {
        self.log.pending_undo()
    }

    /// Replaces `[start, end]` with `payload` (one entry per output line,
    /// bytes as read from the frontend, in order).
    ///
    /// If `start` is more than one past the current end of the buffer,
    /// the positions in between are implicitly touched but never given
    /// real content by the grammar; this keeps `change` total over all
    /// non-negative `start`/`end` pairs by filling them with the same
    /// `.\n` placeholder a print of an out-of-range position would show,
    /// rather than leaving them uninitialized.
    pub fn change(&mut self, start: usize, end: usize, payload: Vec<Vec<u8>>) {
        self.drain(true);

        let length = self.buffer.length();
        let lost_hi = end.min(length);
        let lines_lost = if start <= lost_hi { lost_hi - start + 1 } else { 0 };
        let index_lost_start = start.saturating_sub(1);
        let mut lost_data = Vec::with_capacity(lines_lost);
        for i in 0..lines_lost {
            lost_data.push(self.buffer.get(start + i).clone());
        }

        let effective_start = start.min(length + 1);
        let mut new_data = Vec::with_capacity(end + 1 - effective_start);
        for _ in effective_start..start {
            new_data.push(self.line_store.alloc(b".\n".to_vec()));
        }
        for bytes in payload {
            new_data.push(self.line_store.alloc(bytes));
        }

        for (i, line) in new_data.iter().enumerate() {
            let pos = effective_start + i;
            if pos <= self.buffer.length() {
                self.buffer.overwrite(pos, line.clone());
            } else {
                self.buffer.append(line.clone());
            }
        }

        trace!(target: "engine.change", start, end, lines_lost, "applied change");
        let cmd = Command::Change {
            start: effective_start,
            end,
            new_data,
            lost_data,
            index_lost_start,
            lines_lost,
        };
        self.commit(cmd);
    }

    /// Removes `[start, end]`, clipped to the buffer's current bounds.
    pub fn delete(&mut self, start: usize, end: usize) {
        self.drain(true);

        let length = self.buffer.length();
        let lo = start.max(1);
        let hi = end.min(length);
        let (lost_data, index_lost_start, lines_lost) = if lo <= hi {
            let removed = self.buffer.remove_range(lo, hi);
            let count = removed.len();
            (removed, lo - 1, count)
        } else {
            (Vec::new(), start.saturating_sub(1).min(length), 0)
        };

        trace!(target: "engine.delete", start, end, lines_lost, "applied delete");
        let cmd = Command::Delete {
            start,
            end,
            lost_data,
            index_lost_start,
            lines_lost,
        };
        self.commit(cmd);
    }

    fn commit(&mut self, cmd: Command) {
        self.log.push(cmd);
        let committed = self.log.committed_length();
        if committed > 0 && committed % self.snapshots.k() == 0 {
            self.snapshots.maybe_capture(committed, self.buffer.snapshot_lines());
        }
    }

    /// Writes `[start, end]` to `out`, one line per address; addresses
    /// outside the buffer's current bounds print a bare `.`.
    pub fn print(&mut self, start: i64, end: i64, out: &mut impl Write) -> io::Result<()> {
        self.drain(false);
        let length = self.buffer.length() as i64;
        let mut i = start;
        while i <= end {
            if i >= 1 && i <= length {
                out.write_all(self.buffer.get(i as usize).as_bytes())?;
            } else {
                out.write_all(b".\n")?;
            }
            i += 1;
        }
        Ok(())
    }

    /// Queues `n` additional undo steps (collapsing with any pending
    /// redo already queued).
    pub fn undo(&mut self, n: i64) {
        self.log.adjust_pending(n);
    }

    /// Queues `n` additional redo steps.
    pub fn redo(&mut self, n: i64) {
        self.log.adjust_pending(-n);
    }

    /// Resolves any pending undo/redo displacement against the buffer.
    ///
    /// `clear_queue` additionally drops snapshots whose boundary now lies
    /// past the new commit frontier; a `p` command passes `false` so a
    /// print in the middle of a pending redo does not disturb the redo
    /// tail (see module docs on this divergence from naive resolution).
    fn drain(&mut self, clear_queue: bool) {
        let pending = self.log.take_pending();
        if pending > 0 {
            self.undo_by(pending as usize);
        } else if pending < 0 {
            self.redo_by((-pending) as usize);
        }
        if clear_queue {
            self.snapshots.drop_above(self.log.committed_length());
        }
    }

    fn undo_by(&mut self, p: usize) {
        let c = self.log.committed_length();
        if p >= c {
            self.buffer.bulk_replace(Vec::new());
            self.log.set_committed(0);
            return;
        }
        let target = c - p;
        let k = self.snapshots.k();
        let j = ceil_div(target, k);
        if p > k && j >= 1 && j <= self.snapshots.stored_count() {
            let snap = self.snapshots.snapshot_at_index(j - 1).expect("bounds checked above");
            self.buffer.bulk_replace(snap.lines.clone());
            self.log.set_committed(j * k);
            let residual = j * k - target;
            self.undo_steps(residual);
        } else {
            self.undo_steps(p);
        }
    }

    fn redo_by(&mut self, q: usize) {
        let c = self.log.committed_length();
        let k = self.snapshots.k();
        let target = c + q;
        let j = target / k;
        if q > k && j >= 1 && j <= self.snapshots.stored_count() {
            let boundary = j * k;
            if boundary > c {
                let snap = self.snapshots.snapshot_at_index(j - 1).expect("bounds checked above");
                self.buffer.bulk_replace(snap.lines.clone());
                self.log.set_committed(boundary);
                let residual = target - boundary;
                self.redo_steps(residual);
                return;
            }
        }
        self.redo_steps(q);
    }

    fn undo_steps(&mut self, n: usize) {
        for _ in 0..n {
            let idx = self.log.committed_length() - 1;
            {
                let cmd = self.log.command_at(idx);
                apply_single_undo(&mut self.buffer, cmd);
            }
            self.log.advance_committed(-1);
        }
    }

    fn redo_steps(&mut self, n: usize) {
        for _ in 0..n {
            let idx = self.log.committed_length();
            {
                let cmd = self.log.command_at(idx);
                apply_single_redo(&mut self.buffer, cmd);
            }
            self.log.advance_committed(1);
        }
    }
}

fn ceil_div(a: usize, b: usize) -> usize {
    a.div_ceil(b)
}

fn apply_single_undo(buffer: &mut Buffer, cmd: &Command) {
    match cmd {
        Command::Change {
            start,
            end,
            lost_data,
            index_lost_start,
            lines_lost,
            ..
        } => {
            for (i, line) in lost_data.iter().enumerate() {
                buffer.overwrite(index_lost_start + i + 1, line.clone());
            }
            let appended = (end - start + 1) - lines_lost;
            if appended > 0 {
                let new_len = buffer.length() - appended;
                buffer.truncate(new_len);
            }
        }
        Command::Delete {
            lost_data,
            index_lost_start,
            lines_lost,
            ..
        } => {
            if *lines_lost > 0 {
                buffer.insert_range(index_lost_start + 1, lost_data.clone());
            }
        }
    }
}

fn apply_single_redo(buffer: &mut Buffer, cmd: &Command) {
    match cmd {
        Command::Change { start, new_data, .. } => {
            for (i, line) in new_data.iter().enumerate() {
                let pos = start + i;
                if pos <= buffer.length() {
                    buffer.overwrite(pos, line.clone());
                } else {
                    buffer.append(line.clone());
                }
            }
        }
        Command::Delete { start, end, .. } => {
            let length = buffer.length();
            let lo = (*start).max(1);
            let hi = (*end).min(length);
            if lo <= hi {
                buffer.remove_range(lo, hi);
            }
        }
    }
}
