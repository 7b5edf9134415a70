//! Notation parser — converts "string fret [finger]" text into position events.

use crate::model::{Position, PositionKind};

/// Parse a notation block into an ordered list of position events.
///
/// One event per line, grammar `<string> <fret> [finger]`:
/// - the string index is 1-based in the text and stored 0-based,
/// - fret `0` marks an open string,
/// - a negative fret marks a muted string (chord notation only),
/// - a positive fret is a normal fretted note, with the optional third
///   token taken verbatim as the finger label.
///
/// Parsing is deliberately tolerant: blank lines, lines with fewer than two
/// tokens, and lines whose string or fret token is not an integer are
/// skipped rather than reported. Event order follows source line order.
pub fn parse_notation(text: &str) -> Vec<Position> {
    let mut events = Vec::new();

    for line in text.trim().lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }

        let string = match tokens[0].parse::<i32>() {
            Ok(n) => n - 1, // notation is 1-based
            Err(_) => continue,
        };
        let fret = match tokens[1].parse::<i32>() {
            Ok(n) => n,
            Err(_) => continue,
        };

        let kind = if fret == 0 {
            PositionKind::Open
        } else if fret < 0 {
            PositionKind::Muted
        } else {
            PositionKind::Fretted {
                fret: fret as u32,
                finger: tokens.get(2).map(|s| s.to_string()),
            }
        };

        events.push(Position { string, kind });
    }

    events
}
