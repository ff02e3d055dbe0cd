//! Property-based checks of the invariants the engine is designed to
//! hold regardless of the specific sequence of commands applied.

use ed_state::Engine;
use proptest::prelude::*;

fn line(n: u8) -> Vec<u8> {
    format!("l{n}\n").into_bytes()
}

fn print_all(e: &mut Engine, len: usize) -> String {
    let mut out = Vec::new();
    e.print(1, len.max(1) as i64, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

proptest! {
    /// Appending `n` lines one at a time and then undoing all `n` always
    /// empties the buffer, whatever snapshot interval or append count.
    #[test]
    fn undo_all_appends_empties_buffer(k in 1usize..6, n in 0usize..20) {
        let mut e = Engine::new(k);
        for i in 0..n {
            e.change((i + 1) as usize, (i + 1) as usize, vec![line(i as u8)]);
        }
        e.undo(n as i64);
        print_all(&mut e, 1); // force resolution
        prop_assert_eq!(e.buffer_length(), 0);
        prop_assert_eq!(e.committed_length(), 0);
    }

    /// Undoing `n` steps and then redoing the same `n` steps reproduces
    /// the exact content that existed before the undo.
    #[test]
    fn undo_then_redo_same_depth_is_identity(k in 1usize..6, n in 1usize..20) {
        let mut e = Engine::new(k);
        for i in 0..n {
            e.change((i + 1) as usize, (i + 1) as usize, vec![line(i as u8)]);
        }
        let before = print_all(&mut e, n);

        e.undo(n as i64);
        print_all(&mut e, 1);
        e.redo(n as i64);
        let after = print_all(&mut e, n);

        prop_assert_eq!(before, after);
    }

    /// `committed_length` never exceeds `total_length` (history length),
    /// no matter how undo/redo are interleaved with new mutations.
    #[test]
    fn committed_length_never_exceeds_total(
        k in 1usize..6,
        ops in prop::collection::vec(0i64..8, 1..30),
    ) {
        let mut e = Engine::new(k);
        let mut next_line: u8 = 0;
        for op in ops {
            match op {
                0..=3 => {
                    let len = e.buffer_length();
                    e.change(len + 1, len + 1, vec![line(next_line)]);
                    next_line = next_line.wrapping_add(1);
                }
                4 => {
                    let len = e.buffer_length();
                    if len > 0 {
                        e.delete(len, len);
                    }
                }
                5 => e.undo(2),
                6 => e.redo(2),
                _ => {
                    print_all(&mut e, e.buffer_length() + 1);
                }
            }
            print_all(&mut e, e.buffer_length() + 1); // force any pending resolution
            prop_assert!(e.committed_length() <= e.total_length());
            prop_assert!(e.pending_undo() == 0);
        }
    }
}
