//! Parser tests — notation text in, ordered position events out.

use fretlib::library::{lookup, CHORD_TEMPLATE};
use fretlib::{parse_notation, Position, PositionKind};
use pretty_assertions::assert_eq;

#[test]
fn one_event_per_line_in_source_order() {
    let events = parse_notation("1 0\n2 1 1\n3 2 2");

    assert_eq!(
        events,
        vec![
            Position::open(0),
            Position::fretted(1, 1, Some("1")),
            Position::fretted(2, 2, Some("2")),
        ]
    );
}

#[test]
fn blank_and_short_lines_are_skipped() {
    let events = parse_notation("\n\n3\n   \n4 2\n\n");

    assert_eq!(events, vec![Position::fretted(3, 2, None)]);
}

#[test]
fn non_integer_tokens_are_skipped() {
    let events = parse_notation("x 0\n2 y\n3 1");

    assert_eq!(events, vec![Position::fretted(2, 1, None)]);
}

#[test]
fn negative_fret_is_a_muted_string() {
    let events = parse_notation("6 -1\n5 -2");

    assert_eq!(events, vec![Position::muted(5), Position::muted(4)]);
}

#[test]
fn finger_label_is_taken_verbatim() {
    let events = parse_notation("6 3 T");

    assert_eq!(events, vec![Position::fretted(5, 3, Some("T"))]);
}

#[test]
fn extra_tokens_beyond_finger_are_ignored() {
    let events = parse_notation("2 3 1 extra tokens");

    assert_eq!(events, vec![Position::fretted(1, 3, Some("1"))]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let events = parse_notation("  \n  1 0  \n\t5 2 2\n  ");

    assert_eq!(
        events,
        vec![Position::open(0), Position::fretted(4, 2, Some("2"))]
    );
}

#[test]
fn out_of_range_strings_parse_without_bounds_check() {
    // Bounds are a rendering concern; the parser reports what the text says.
    let events = parse_notation("9 3");

    assert_eq!(events, vec![Position::fretted(8, 3, None)]);
}

#[test]
fn chord_template_parses_to_expected_events() {
    let events = parse_notation(CHORD_TEMPLATE);

    assert_eq!(events.len(), 6);
    assert_eq!(events[0], Position::open(0));

    // Strings 2-6 (0-based 1-5) are each covered exactly once.
    let mut strings: Vec<i32> = events.iter().map(|e| e.string).collect();
    strings.sort_unstable();
    assert_eq!(strings, vec![0, 1, 2, 3, 4, 5]);

    // Finger labels on strings 2-4.
    for event in &events {
        match &event.kind {
            PositionKind::Fretted { finger, .. } => {
                assert!((1..=3).contains(&event.string));
                assert!(finger.is_some());
            }
            PositionKind::Open => {
                assert!([0, 4, 5].contains(&event.string));
            }
            PositionKind::Muted => panic!("template has no muted strings"),
        }
    }
}

#[test]
fn library_g_chord_parses_to_expected_events() {
    let lines = lookup("G").expect("G should be in the library");
    let events = parse_notation(&lines.join("\n"));

    assert_eq!(events.iter().filter(|e| e.is_open()).count(), 4);
    assert_eq!(events.iter().filter(|e| e.is_fretted()).count(), 2);

    assert!(events.contains(&Position::fretted(5, 3, Some("3"))));
    assert!(events.contains(&Position::fretted(4, 2, Some("2"))));
}
