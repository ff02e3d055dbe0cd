//! Additional end-to-end sessions beyond the six pinned scenarios in
//! `spec_scenarios.rs`, covering shapes those don't exercise directly.

use ed_bin::run;
use ed_state::Engine;

fn drive(engine: &mut Engine, script: &str) -> String {
    let mut out = Vec::new();
    run(engine, script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn overwrite_replaces_in_place_without_disturbing_neighbors() {
    let mut e = Engine::new(300);
    let out = drive(&mut e, "1,3c\na\nb\nc\n.\n2,2c\nB\n.\n1,3p\nq\n");
    assert_eq!(out, "a\nB\nc\n");
}

/// A print issued while a redo is still queued must not discard the
/// rest of the redo tail.
#[test]
fn print_preserves_pending_redo_tail() {
    let mut e = Engine::new(300);
    let out = drive(&mut e, "1,1c\na\n.\n2,2c\nb\n.\n2u\n1r\n1,1p\n1r\n1,2p\nq\n");
    // first print resolves only the queued partial undo down to "a";
    // the second redo then recovers "b"
    assert_eq!(out, "a\na\nb\n");
}

/// Undo followed by a brand new command truncates the redo tail, so a
/// later redo request has nothing left to apply.
#[test]
fn new_command_after_undo_truncates_redo_tail() {
    let mut e = Engine::new(300);
    let out = drive(&mut e, "1,1c\na\n.\n2,2c\nb\n.\n1u\n2,2c\nx\n.\n1r\n1,2p\nq\n");
    assert_eq!(out, "a\nx\n");
}

/// Undo spanning a snapshot boundary reaches the same content a series
/// of single-step undos would, at a snapshot interval much smaller than
/// the default.
#[test]
fn deep_undo_crosses_snapshot_boundary_at_small_k() {
    let mut e = Engine::new(4);
    for i in 1..=9usize {
        drive(&mut e, &format!("{i},{i}c\nl{i}\n.\n"));
    }
    let out = drive(&mut e, "7u\n1,9p\nq\n");
    assert_eq!(out, "l1\nl2\n.\n.\n.\n.\n.\n.\n.\n");
}
