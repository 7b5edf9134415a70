//! Diagram configuration — defaults, host overrides, and the merge policy.
//!
//! The host keeps settings in a loose key/value store; this module reads
//! them as a partial [`ConfigOverrides`] document and resolves it into a
//! fully-populated, immutable [`Config`] that every render call borrows.

use serde::{Deserialize, Serialize};

/// Resolved rendering configuration.
///
/// Constructed once by merging host overrides over the defaults (see
/// [`ConfigOverrides::resolve`]) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Number of strings on the instrument.
    pub string_count: usize,
    /// Number of frets shown in the diagram window.
    pub fret_count: usize,
    /// Draw the filled dot for fretted notes.
    pub show_dots: bool,
    /// Draw the finger label inside the dot.
    pub show_fingers: bool,
    /// Mirror string order left-to-right for left-handed players.
    pub lefty: bool,
    /// Vertical size of one fret cell, in SVG user units.
    pub fret_width: f64,
    /// Horizontal distance between adjacent strings.
    pub string_spacing: f64,
    /// Font family for all diagram text.
    pub font_family: String,
    /// Diameter of a fretted-note dot.
    pub dot_size: f64,
    /// Stroke width of the grid lines.
    pub stroke_width: f64,
    /// Canvas background color.
    pub background_color: String,
    /// Grid lines and open/mute markers.
    pub foreground_color: String,
    /// Fill color of fretted-note dots.
    pub dot_color: String,
    /// Color of the chord-name title.
    pub chord_name_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            string_count: 6,
            fret_count: 5,
            show_dots: true,
            show_fingers: true,
            lefty: false,
            fret_width: 30.0,
            string_spacing: 20.0,
            font_family: "Arial, sans-serif".to_string(),
            dot_size: 16.0,
            stroke_width: 2.0,
            background_color: "#ffffff".to_string(),
            foreground_color: "#000000".to_string(),
            dot_color: "#4287f5".to_string(),
            chord_name_color: "#ff0000".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from a host settings document (JSON).
    ///
    /// Fails soft: an unreadable or malformed document yields the full
    /// defaults rather than an error, so a broken settings store never
    /// breaks rendering.
    pub fn from_json(json: &str) -> Config {
        match serde_json::from_str::<ConfigOverrides>(json) {
            Ok(overrides) => overrides.resolve(),
            Err(_) => Config::default(),
        }
    }
}

/// Partial configuration as read from the host settings store.
///
/// Field names match the host's camelCase settings keys; unrecognized keys
/// in the source document are ignored, missing keys stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverrides {
    pub string_count: Option<i64>,
    pub fret_count: Option<i64>,
    pub show_dots: Option<bool>,
    pub show_fingers: Option<bool>,
    pub lefty: Option<bool>,
    pub fret_width: Option<f64>,
    pub string_spacing: Option<f64>,
    pub font_family: Option<String>,
    pub dot_size: Option<f64>,
    pub stroke_width: Option<f64>,
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub dot_color: Option<String>,
    pub chord_name_color: Option<String>,
}

impl ConfigOverrides {
    /// Merge these overrides over the defaults.
    ///
    /// Booleans are tri-state: an explicit `false` wins, only a missing key
    /// falls back. Numeric fields win only when positive and strings only
    /// when non-empty, so a zero count or empty color reads as "unset".
    pub fn resolve(&self) -> Config {
        let d = Config::default();
        Config {
            string_count: positive_count(self.string_count, d.string_count),
            fret_count: positive_count(self.fret_count, d.fret_count),
            show_dots: self.show_dots.unwrap_or(d.show_dots),
            show_fingers: self.show_fingers.unwrap_or(d.show_fingers),
            lefty: self.lefty.unwrap_or(d.lefty),
            fret_width: positive(self.fret_width, d.fret_width),
            string_spacing: positive(self.string_spacing, d.string_spacing),
            font_family: non_empty(self.font_family.as_deref(), d.font_family),
            dot_size: positive(self.dot_size, d.dot_size),
            stroke_width: positive(self.stroke_width, d.stroke_width),
            background_color: non_empty(self.background_color.as_deref(), d.background_color),
            foreground_color: non_empty(self.foreground_color.as_deref(), d.foreground_color),
            dot_color: non_empty(self.dot_color.as_deref(), d.dot_color),
            chord_name_color: non_empty(self.chord_name_color.as_deref(), d.chord_name_color),
        }
    }
}

impl From<&Config> for ConfigOverrides {
    /// Express a resolved configuration as a full set of overrides.
    ///
    /// Resolving the result reproduces the original configuration, which is
    /// what lets hosts persist a resolved value back into their store.
    fn from(config: &Config) -> Self {
        Self {
            string_count: Some(config.string_count as i64),
            fret_count: Some(config.fret_count as i64),
            show_dots: Some(config.show_dots),
            show_fingers: Some(config.show_fingers),
            lefty: Some(config.lefty),
            fret_width: Some(config.fret_width),
            string_spacing: Some(config.string_spacing),
            font_family: Some(config.font_family.clone()),
            dot_size: Some(config.dot_size),
            stroke_width: Some(config.stroke_width),
            background_color: Some(config.background_color.clone()),
            foreground_color: Some(config.foreground_color.clone()),
            dot_color: Some(config.dot_color.clone()),
            chord_name_color: Some(config.chord_name_color.clone()),
        }
    }
}

fn positive_count(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(n) if n > 0 => n as usize,
        _ => default,
    }
}

fn positive(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => default,
    }
}

fn non_empty(value: Option<&str>, default: String) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default,
    }
}
