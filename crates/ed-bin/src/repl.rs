//! Reads commands from a stream and dispatches them against an [`Engine`].

use std::io::{BufRead, Write};

use anyhow::Result;
use ed_state::Engine;
use tracing::trace;

use crate::parser::{parse_line, ParsedCommand};

/// Drives `engine` from `input` until a `q` command or end of input,
/// writing `p` output to `output`.
pub fn run(engine: &mut Engine, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_line(&line) {
            ParsedCommand::Change { start, end } => {
                let payload = read_payload(&mut input, start, end)?;
                trace!(target: "repl", start, end, "dispatch change");
                engine.change(start, end, payload);
            }
            ParsedCommand::Delete { start, end } => {
                trace!(target: "repl", start, end, "dispatch delete");
                engine.delete(start, end);
            }
            ParsedCommand::Print { start, end } => {
                trace!(target: "repl", start, end, "dispatch print");
                engine.print(start as i64, end as i64, &mut output)?;
            }
            ParsedCommand::Undo(n) => {
                trace!(target: "repl", n, "dispatch undo");
                engine.undo(n as i64);
            }
            ParsedCommand::Redo(n) => {
                trace!(target: "repl", n, "dispatch redo");
                engine.redo(n as i64);
            }
            ParsedCommand::Quit => break,
            ParsedCommand::Unknown => {}
        }
    }
    output.flush()?;
    Ok(())
}

/// Reads the `end - start + 1` payload lines for a `c` command followed
/// by its `.` terminator line. Running out of input mid-payload simply
/// stops early; the frontend does not treat that as an error.
fn read_payload(input: &mut impl BufRead, start: usize, end: usize) -> Result<Vec<Vec<u8>>> {
    let count = end.saturating_sub(start).saturating_add(1);
    let mut payload = Vec::with_capacity(count);
    for _ in 0..count {
        let mut raw = String::new();
        if input.read_line(&mut raw)? == 0 {
            break;
        }
        payload.push(raw.into_bytes());
    }
    let mut terminator = String::new();
    input.read_line(&mut terminator)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(script: &str) -> String {
        let mut engine = Engine::new(300);
        let mut out = Vec::new();
        run(&mut engine, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn change_then_print() {
        let out = run_str("1,2c\na\nb\n.\n1,2p\nq\n");
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn delete_then_print_shows_dots() {
        let out = run_str("1,2c\na\nb\n.\n1,1d\n1,2p\nq\n");
        assert_eq!(out, "b\n.\n");
    }

    #[test]
    fn undo_reverses_last_command() {
        let out = run_str("1,1c\na\n.\n2,2c\nb\n.\n1u\n1,2p\nq\n");
        assert_eq!(out, "a\n.\n");
    }

    #[test]
    fn quit_stops_processing_remaining_input() {
        let out = run_str("1,1c\na\n.\nq\n1,1p\n");
        assert_eq!(out, "");
    }

    #[test]
    fn unknown_command_is_ignored() {
        let out = run_str("garbage\n1,1c\na\n.\n1,1p\nq\n");
        assert_eq!(out, "a\n");
    }
}
