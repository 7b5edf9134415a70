//! Data model for fingering positions parsed from notation text.
//!
//! These structures capture the essential information needed to place
//! markers on a fretboard diagram.

use serde::{Deserialize, Serialize};

/// What happens on one string of the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionKind {
    /// A note stopped at `fret` (1-based, fret 1 is next to the nut),
    /// optionally annotated with a fingering label.
    Fretted {
        fret: u32,
        /// Taken verbatim from the notation; traditionally a digit 1–4,
        /// but any token is accepted ("T" for thumb is common).
        finger: Option<String>,
    },
    /// The string is played open (fret 0 in notation).
    Open,
    /// The string is not played (negative fret in chord notation).
    Muted,
}

/// One parsed notation line: a string index plus what to do on that string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// 0-based string index. Notation text is 1-based; the parser subtracts
    /// one and performs no bounds check, so this value may fall outside the
    /// configured string count (the renderer skips such events).
    pub string: i32,
    /// What to draw for this string.
    pub kind: PositionKind,
}

impl Position {
    /// A fretted note on `string` (0-based) at `fret`.
    pub fn fretted(string: i32, fret: u32, finger: Option<&str>) -> Self {
        Self {
            string,
            kind: PositionKind::Fretted {
                fret,
                finger: finger.map(String::from),
            },
        }
    }

    /// An open string.
    pub fn open(string: i32) -> Self {
        Self {
            string,
            kind: PositionKind::Open,
        }
    }

    /// A muted string.
    pub fn muted(string: i32) -> Self {
        Self {
            string,
            kind: PositionKind::Muted,
        }
    }

    /// Whether this event is a fretted note.
    pub fn is_fretted(&self) -> bool {
        matches!(self.kind, PositionKind::Fretted { .. })
    }

    /// Whether this event is an open string.
    pub fn is_open(&self) -> bool {
        matches!(self.kind, PositionKind::Open)
    }

    /// Whether this event is a muted string.
    pub fn is_muted(&self) -> bool {
        matches!(self.kind, PositionKind::Muted)
    }
}
