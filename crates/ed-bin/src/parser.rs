//! Parses one line of frontend input into a [`ParsedCommand`].
//!
//! The grammar recognizes exactly six shapes: `<a>,<b>c`, `<a>,<b>d`,
//! `<a>,<b>p`, `<n>u`, `<n>r`, and `q`. Anything else is
//! [`ParsedCommand::Unknown`] and is silently dropped by the caller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Change { start: usize, end: usize },
    Delete { start: usize, end: usize },
    Print { start: usize, end: usize },
    Undo(usize),
    Redo(usize),
    Quit,
    Unknown,
}

pub fn parse_line(raw: &str) -> ParsedCommand {
    let line = raw.trim_end_matches(['\n', '\r']);
    if line == "q" {
        return ParsedCommand::Quit;
    }

    let Some(tag) = line.chars().last() else {
        return ParsedCommand::Unknown;
    };
    let body = &line[..line.len() - tag.len_utf8()];

    match tag {
        'c' => split_pair(body)
            .map(|(start, end)| ParsedCommand::Change { start, end })
            .unwrap_or(ParsedCommand::Unknown),
        'd' => split_pair(body)
            .map(|(start, end)| ParsedCommand::Delete { start, end })
            .unwrap_or(ParsedCommand::Unknown),
        'p' => split_pair(body)
            .map(|(start, end)| ParsedCommand::Print { start, end })
            .unwrap_or(ParsedCommand::Unknown),
        'u' => body
            .parse::<usize>()
            .map(ParsedCommand::Undo)
            .unwrap_or(ParsedCommand::Unknown),
        'r' => body
            .parse::<usize>()
            .map(ParsedCommand::Redo)
            .unwrap_or(ParsedCommand::Unknown),
        _ => ParsedCommand::Unknown,
    }
}

fn split_pair(body: &str) -> Option<(usize, usize)> {
    let (a, b) = body.split_once(',')?;
    Some((a.parse().ok()?, b.parse().ok()?))
}
