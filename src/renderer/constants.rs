//! Shared constants for the diagram renderer (all in SVG user units).

// ── Title band ──────────────────────────────────────────────────────
pub(super) const TITLE_BAND_HEIGHT: f64 = 20.0; // reserved above the grid
pub(super) const TITLE_BASELINE_Y: f64 = 15.0;
pub(super) const TITLE_FONT_SIZE: f64 = 16.0;

// ── String-state markers (above the nut) ────────────────────────────
pub(super) const STRING_STATE_RISE: f64 = 10.0; // above the top fret line
pub(super) const OPEN_MARKER_RADIUS: f64 = 5.0;
pub(super) const OPEN_MARKER_STROKE_WIDTH: f64 = 1.0;
pub(super) const MUTE_MARKER_FONT_SIZE: f64 = 12.0;

// ── Starting-fret label ─────────────────────────────────────────────
pub(super) const FRET_LABEL_X: f64 = -15.0; // left of the grid
pub(super) const FRET_LABEL_DROP: f64 = 15.0; // below the grid top
pub(super) const FRET_LABEL_FONT_SIZE: f64 = 12.0;

// ── Finger labels ───────────────────────────────────────────────────
pub(super) const FINGER_FONT_SCALE: f64 = 0.8; // relative to dot size
pub(super) const FINGER_COLOR: &str = "#ffffff";
