//! Event-script reader (§6.1): one directive per non-blank line, whitespace
//! split, `addNode`/`removeNode` (2 tokens) and `addEdge`/`removeEdge` (3
//! tokens).

use closeness_core::VertexId;

use crate::error::CliError;
use crate::identifiers::decode_identifier;

/// One parsed directive from an event script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AddNode(VertexId),
    RemoveNode(VertexId),
    AddEdge(VertexId, VertexId),
    RemoveEdge(VertexId, VertexId),
}

/// Parse `source` into the events it describes, each tagged with its
/// 1-based source line so later stages (e.g. an engine rejection) can still
/// report where it came from.
///
/// Blank lines are skipped silently. A line that fails to parse is recorded
/// in the returned `skipped` list alongside its 1-based line number, rather
/// than aborting the whole read — the driver decides what to do with those
/// (§7's skip-with-warning policy).
pub fn read_events(source: &str) -> (Vec<(usize, Event)>, Vec<(usize, CliError)>) {
    let mut events = Vec::new();
    let mut skipped = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        match parse_line(line, line_no) {
            Ok(event) => events.push((line_no, event)),
            Err(err) => skipped.push((line_no, err)),
        }
    }

    (events, skipped)
}

fn parse_line(line: &str, line_no: usize) -> Result<Event, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let malformed = || CliError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    match tokens.as_slice() {
        ["addNode", id] => Ok(Event::AddNode(decode_identifier(id, line_no)?)),
        ["removeNode", id] => Ok(Event::RemoveNode(decode_identifier(id, line_no)?)),
        ["addEdge", u, v] => Ok(Event::AddEdge(
            decode_identifier(u, line_no)?,
            decode_identifier(v, line_no)?,
        )),
        ["removeEdge", u, v] => Ok(Event::RemoveEdge(
            decode_identifier(u, line_no)?,
            decode_identifier(v, line_no)?,
        )),
        _ => Err(malformed()),
    }
}
