//! Periodic full-buffer snapshots used to accelerate deep undo/redo.

use ed_text::Line;

/// A full copy of the buffer's line sequence as it stood after some
/// multiple of `K` committed commands.
pub struct Snapshot {
    pub lines: Vec<Line>,
}

/// Stores one [`Snapshot`] for every `k` committed commands.
///
/// Snapshot `i` (0-based) always corresponds to commit frontier
/// `(i + 1) * k`. That fixed relationship is what lets
/// [`SnapshotStore::snapshot_at_index`] locate the right snapshot with
/// arithmetic instead of a search.
pub struct SnapshotStore {
    k: usize,
    snapshots: Vec<Snapshot>,
    reclaimed_total: u64,
}

impl SnapshotStore {
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "snapshot interval must be positive");
        Self {
            k,
            snapshots: Vec::new(),
            reclaimed_total: 0,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn stored_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn reclaimed_total(&self) -> u64 {
        self.reclaimed_total
    }

    /// Captures a snapshot if `committed_length` lands exactly on a
    /// multiple of `k`.
    pub fn maybe_capture(&mut self, committed_length: usize, lines: Vec<Line>) {
        if committed_length > 0 && committed_length % self.k == 0 {
            self.snapshots.push(Snapshot { lines });
        }
    }

    /// Returns the 0-based index of the snapshot whose boundary is
    /// `index * k`, or `None` if it hasn't been captured.
    pub fn snapshot_at_index(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Drops every snapshot whose boundary lies past `committed_length`;
    /// used when a new mutation truncates the redo tail.
    pub fn drop_above(&mut self, committed_length: usize) {
        let keep = committed_length / self.k;
        if self.snapshots.len() > keep {
            self.reclaimed_total += (self.snapshots.len() - keep) as u64;
            self.snapshots.truncate(keep);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed_text::LineStore;

    fn lines(store: &LineStore, n: usize) -> Vec<Line> {
        (0..n).map(|i| store.alloc(format!("{i}\n").into_bytes())).collect()
    }

    #[test]
    fn captures_only_on_multiples_of_k() {
        let store = LineStore::new();
        let mut snaps = SnapshotStore::new(3);
        snaps.maybe_capture(1, lines(&store, 1));
        snaps.maybe_capture(2, lines(&store, 2));
        assert_eq!(snaps.stored_count(), 0);
        snaps.maybe_capture(3, lines(&store, 3));
        assert_eq!(snaps.stored_count(), 1);
        snaps.maybe_capture(6, lines(&store, 6));
        assert_eq!(snaps.stored_count(), 2);
    }

    #[test]
    fn drop_above_trims_trailing_snapshots() {
        let store = LineStore::new();
        let mut snaps = SnapshotStore::new(3);
        for n in [3usize, 6, 9] {
            snaps.maybe_capture(n, lines(&store, n));
        }
        assert_eq!(snaps.stored_count(), 3);
        snaps.drop_above(7);
        assert_eq!(snaps.stored_count(), 2);
        assert_eq!(snaps.reclaimed_total(), 1);
    }

    #[test]
    fn snapshot_at_index_reflects_boundary() {
        let store = LineStore::new();
        let mut snaps = SnapshotStore::new(3);
        snaps.maybe_capture(3, lines(&store, 3));
        let snap = snaps.snapshot_at_index(0).unwrap();
        assert_eq!(snap.lines.len(), 3);
        assert!(snaps.snapshot_at_index(1).is_none());
    }
}
