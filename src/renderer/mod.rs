//! Diagram renderer — converts position events into a drawable scene.
//!
//! The renderer computes canvas dimensions from the configuration, draws
//! the fretboard grid, and places dot/finger/open/mute markers per event.
//! Its output is a [`Scene`] of plain draw primitives; `scene_to_svg`
//! serializes one to SVG.

mod constants;
mod layout;
pub mod scene;
mod svg;

use crate::config::Config;
use crate::library;
use crate::model::{Position, PositionKind};
use crate::parser::parse_notation;

use constants::*;
use layout::{compute_layout, fret_y, string_x, GridLayout};
use scene::Scene;

pub use svg::scene_to_svg;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render chord position events into a scene.
///
/// `start_fret` names the fret at the top of the grid; values above 1 are
/// drawn as a label left of the grid for diagrams that depict a fragment
/// of the neck beyond the nut, while 1 (the nut itself) draws nothing.
pub fn render_chord_diagram(
    events: &[Position],
    config: &Config,
    title: Option<&str>,
    start_fret: u32,
) -> Scene {
    render_diagram(events, config, title, start_fret, true)
}

/// Render scale position events into a scene.
///
/// Scale notation has no muted-string concept, so muted events are
/// dropped rather than drawn.
pub fn render_scale_diagram(events: &[Position], config: &Config, title: Option<&str>) -> Scene {
    render_diagram(events, config, title, 1, false)
}

/// Render a chord from the library by name, with the name as title.
///
/// Returns `None` when the name is not in the library; falling back (for
/// example, leaving the original text in place) is the caller's job.
pub fn render_named_chord(name: &str, config: &Config) -> Option<Scene> {
    let lines = library::lookup(name)?;
    let events = parse_notation(&lines.join("\n"));
    Some(render_chord_diagram(&events, config, Some(name), 1))
}

// ═══════════════════════════════════════════════════════════════════════
// Diagram assembly
// ═══════════════════════════════════════════════════════════════════════

fn render_diagram(
    events: &[Position],
    config: &Config,
    title: Option<&str>,
    start_fret: u32,
    allow_muted: bool,
) -> Scene {
    let grid = compute_layout(config, title.is_some());
    let mut scene = Scene::new(grid.width, grid.height, &config.background_color);

    if let Some(title) = title {
        scene.text(
            grid.width / 2.0,
            TITLE_BASELINE_Y,
            title,
            &config.font_family,
            TITLE_FONT_SIZE,
            true,
            &config.chord_name_color,
            false,
        );
    }

    draw_grid(&mut scene, config, &grid);

    if start_fret > 1 {
        scene.text(
            FRET_LABEL_X,
            grid.top + FRET_LABEL_DROP,
            &start_fret.to_string(),
            &config.font_family,
            FRET_LABEL_FONT_SIZE,
            false,
            &config.foreground_color,
            false,
        );
    }

    for event in events {
        // Out-of-range string indices come from malformed notation; skip
        // them rather than clamp so nothing lands on the wrong string.
        let x = match string_x(config, event.string) {
            Some(x) => x,
            None => continue,
        };

        match &event.kind {
            PositionKind::Fretted { fret, finger } => {
                draw_fretted(&mut scene, config, &grid, x, *fret, finger.as_deref());
            }
            PositionKind::Open => draw_open(&mut scene, config, &grid, x),
            PositionKind::Muted => {
                if allow_muted {
                    draw_muted(&mut scene, config, &grid, x);
                }
            }
        }
    }

    scene
}

fn draw_grid(scene: &mut Scene, config: &Config, grid: &GridLayout) {
    let grid_width = (config.string_count as f64 - 1.0) * config.string_spacing;
    let grid_height = config.fret_count as f64 * config.fret_width;

    // Horizontal lines (frets)
    for i in 0..=config.fret_count {
        let y = grid.top + i as f64 * config.fret_width;
        scene.line(
            0.0,
            y,
            grid_width,
            y,
            &config.foreground_color,
            config.stroke_width,
        );
    }

    // Vertical lines (strings)
    for i in 0..config.string_count {
        let x = i as f64 * config.string_spacing;
        scene.line(
            x,
            grid.top,
            x,
            grid.top + grid_height,
            &config.foreground_color,
            config.stroke_width,
        );
    }
}

fn draw_fretted(
    scene: &mut Scene,
    config: &Config,
    grid: &GridLayout,
    x: f64,
    fret: u32,
    finger: Option<&str>,
) {
    let y = fret_y(config, grid.top, fret);

    if config.show_dots {
        scene.filled_circle(x, y, config.dot_size / 2.0, &config.dot_color);
    }

    if let Some(finger) = finger {
        if config.show_fingers {
            scene.text(
                x,
                y,
                finger,
                &config.font_family,
                config.dot_size * FINGER_FONT_SCALE,
                false,
                FINGER_COLOR,
                true,
            );
        }
    }
}

fn draw_open(scene: &mut Scene, config: &Config, grid: &GridLayout, x: f64) {
    scene.outlined_circle(
        x,
        grid.top - STRING_STATE_RISE,
        OPEN_MARKER_RADIUS,
        &config.foreground_color,
        OPEN_MARKER_STROKE_WIDTH,
    );
}

fn draw_muted(scene: &mut Scene, config: &Config, grid: &GridLayout, x: f64) {
    scene.text(
        x,
        grid.top - STRING_STATE_RISE,
        "X",
        &config.font_family,
        MUTE_MARKER_FONT_SIZE,
        false,
        &config.foreground_color,
        true,
    );
}
