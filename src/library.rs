//! Static chord library — canonical fingerings for common open chords.
//!
//! Keys are exact chord spellings; lookup is case sensitive and performs no
//! enharmonic normalization ("G#" and "Ab" would be distinct entries, and
//! only one spelling per chord is defined here).

/// Notation inserted by the host's "insert chord diagram" command (C major).
pub const CHORD_TEMPLATE: &str = "1 0\n2 1 1\n3 2 2\n4 2 3\n5 0\n6 0";

/// Notation inserted by the host's "insert scale diagram" command.
pub const SCALE_TEMPLATE: &str = "1 0\n1 2\n1 3\n1 5\n2 0\n2 2\n2 3\n2 5";

/// Chord name → notation lines, one position per line.
const CHORD_LIBRARY: &[(&str, &[&str])] = &[
    // Major chords
    ("G", &["3 0", "2 0", "1 0", "6 3 3", "5 2 2", "4 0"]),
    ("C", &["5 3 3", "4 2 2", "3 0", "2 1 1", "1 0"]),
    ("D", &["4 0", "3 2 3", "2 3 2", "1 2 1"]),
    ("A", &["5 0", "4 2 2", "3 2 3", "2 2 4", "1 0"]),
    ("E", &["6 0", "5 2 2", "4 2 3", "3 1 1", "2 0", "1 0"]),
    ("F", &["6 1 1", "5 3 3", "4 3 4", "3 2 2", "2 1 1", "1 1 1"]),
    ("B", &["5 2 1", "4 4 3", "3 4 4", "2 4 4", "1 2 2"]),
    // Minor chords
    ("Em", &["6 0", "5 2 2", "4 2 3", "3 0", "2 0", "1 0"]),
    ("Am", &["5 0", "4 2 2", "3 2 3", "2 1 1", "1 0"]),
    ("Dm", &["4 0", "3 2 3", "2 3 2", "1 1 1"]),
    ("Bm", &["5 2 1", "4 4 3", "3 4 4", "2 3 2", "1 2 2"]),
    // 7th chords
    ("G7", &["6 3 3", "5 2 2", "4 0", "3 0", "2 0", "1 1 1"]),
    ("C7", &["5 3 3", "4 2 2", "3 3 4", "2 1 1", "1 0"]),
    ("D7", &["4 0", "3 2 3", "2 1 1", "1 2 2"]),
    ("A7", &["5 0", "4 2 2", "3 0", "2 2 3", "1 0"]),
    ("E7", &["6 0", "5 2 2", "4 0", "3 1 1", "2 0", "1 0"]),
    // Minor 7th chords
    ("Am7", &["5 0", "4 2 2", "3 0", "2 1 1", "1 0"]),
    ("Em7", &["6 0", "5 2 2", "4 0", "3 0", "2 0", "1 0"]),
    ("Dm7", &["4 0", "3 2 3", "2 1 1", "1 1 2"]),
    // Other common chords
    ("G/B", &["5 2 2", "4 0", "3 0", "2 0", "1 3 4"]),
    ("Cadd9", &["5 3 3", "4 2 2", "3 0", "2 3 4", "1 0"]),
    ("Dsus2", &["4 0", "3 2 3", "2 3 4", "1 0"]),
    ("Asus2", &["5 0", "4 0", "3 2 2", "2 2 3", "1 0"]),
];

/// Look up the notation lines for a chord by exact name.
///
/// Returns `None` on a miss; detecting the miss and falling back is the
/// caller's responsibility.
pub fn lookup(name: &str) -> Option<&'static [&'static str]> {
    CHORD_LIBRARY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, lines)| lines)
}

/// All chord names in library order, for the host's chord pick-list.
pub fn chord_names() -> Vec<&'static str> {
    CHORD_LIBRARY.iter().map(|&(name, _)| name).collect()
}
