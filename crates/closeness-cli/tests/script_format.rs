//! End-to-end check of the event-script format against a realistic script,
//! run through the same reader the binary uses.

use closeness_cli::script::{read_events, Event};

#[test]
fn line_of_four_script_parses_into_the_expected_events() {
    let script = "\
        addNode 0\n\
        addNode 1\n\
        addNode 2\n\
        addNode 3\n\
        addEdge 0 1\n\
        addEdge 1 2\n\
        addEdge 2 3\n\
    ";
    let (events, skipped) = read_events(script);
    assert!(skipped.is_empty());
    assert_eq!(
        events,
        vec![
            (1, Event::AddNode(0)),
            (2, Event::AddNode(1)),
            (3, Event::AddNode(2)),
            (4, Event::AddNode(3)),
            (5, Event::AddEdge(0, 1)),
            (6, Event::AddEdge(1, 2)),
            (7, Event::AddEdge(2, 3)),
        ]
    );
}

#[test]
fn n_prefixed_identifiers_are_accepted_throughout_a_script() {
    let script = "addNode n10\naddNode n20\naddEdge n10 n20\nremoveEdge n10 n20\nremoveNode n20\n";
    let (events, skipped) = read_events(script);
    assert!(skipped.is_empty());
    assert_eq!(
        events,
        vec![
            (1, Event::AddNode(10)),
            (2, Event::AddNode(20)),
            (3, Event::AddEdge(10, 20)),
            (4, Event::RemoveEdge(10, 20)),
            (5, Event::RemoveNode(20)),
        ]
    );
}

#[test]
fn a_single_bad_line_does_not_prevent_the_rest_of_the_script_from_parsing() {
    let script = "addNode 0\naddNode 1\nbogusDirective 5\naddEdge 0 1\n";
    let (events, skipped) = read_events(script);
    assert_eq!(events.len(), 3);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, 3);
}
