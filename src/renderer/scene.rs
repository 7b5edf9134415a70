//! Scene graph — the renderer's output as plain draw primitives.
//!
//! A [`Scene`] is a pure value: geometry plus style, with no graphics API
//! attached. The `svg` module serializes it to SVG; hosts that want a
//! different output format can walk the primitives themselves (or take the
//! whole scene as JSON across FFI via `scene_to_json`).

use serde::{Deserialize, Serialize};

/// A single draw primitive.
///
/// All diagram text is horizontally centered on its anchor point;
/// `middle_baseline` additionally centers it vertically (finger labels and
/// mute markers sit on their coordinate, titles sit above it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        /// Fill color; `None` renders an unfilled outline.
        fill: Option<String>,
        /// Stroke color; `None` renders without an outline.
        stroke: Option<String>,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_family: String,
        font_size: f64,
        bold: bool,
        color: String,
        middle_baseline: bool,
    },
}

/// A complete diagram: canvas size, background, and ordered primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub(crate) fn new(width: f64, height: f64, background_color: &str) -> Self {
        Self {
            width,
            height,
            background_color: background_color.to_string(),
            primitives: Vec::new(),
        }
    }

    pub(crate) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.primitives.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    pub(crate) fn filled_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.primitives.push(Primitive::Circle {
            cx,
            cy,
            r,
            fill: Some(fill.to_string()),
            stroke: None,
            stroke_width: 0.0,
        });
    }

    pub(crate) fn outlined_circle(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, stroke_width: f64) {
        self.primitives.push(Primitive::Circle {
            cx,
            cy,
            r,
            fill: None,
            stroke: Some(stroke.to_string()),
            stroke_width,
        });
    }

    pub(crate) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        font_family: &str,
        font_size: f64,
        bold: bool,
        color: &str,
        middle_baseline: bool,
    ) {
        self.primitives.push(Primitive::Text {
            x,
            y,
            content: content.to_string(),
            font_family: font_family.to_string(),
            font_size,
            bold,
            color: color.to_string(),
            middle_baseline,
        });
    }
}
