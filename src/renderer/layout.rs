//! Grid geometry — canvas sizing, string/fret coordinates, lefty mapping.

use crate::config::Config;

use super::constants::TITLE_BAND_HEIGHT;

/// Computed geometry for one diagram.
pub(super) struct GridLayout {
    /// Canvas width: one string-spacing per string.
    pub(super) width: f64,
    /// Canvas height: fret cells plus the title band when present.
    pub(super) height: f64,
    /// Y of the grid's top line; non-zero when a title band is reserved.
    pub(super) top: f64,
}

pub(super) fn compute_layout(config: &Config, has_title: bool) -> GridLayout {
    let band = if has_title { TITLE_BAND_HEIGHT } else { 0.0 };
    GridLayout {
        width: config.string_count as f64 * config.string_spacing,
        height: (config.fret_count as f64 + 1.0) * config.fret_width + band,
        top: band,
    }
}

/// Horizontal position of a string, mirrored when lefty.
///
/// Returns `None` when the 0-based index falls outside the configured
/// string count, so malformed notation is skipped instead of drawn.
pub(super) fn string_x(config: &Config, string: i32) -> Option<f64> {
    if string < 0 || string as usize >= config.string_count {
        return None;
    }
    let mut s = string as usize;
    if config.lefty {
        s = config.string_count - 1 - s;
    }
    Some(s as f64 * config.string_spacing)
}

/// Vertical center of a fret cell — markers sit mid-cell, not on the wire.
pub(super) fn fret_y(config: &Config, grid_top: f64, fret: u32) -> f64 {
    grid_top + (fret as f64 - 0.5) * config.fret_width
}
