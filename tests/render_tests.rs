//! Rendering tests — canvas geometry, marker placement, and SVG structure.

use fretlib::{
    parse_notation, render_chord_diagram, render_chord_svg, render_named_chord_svg,
    render_scale_diagram, render_scale_svg, scene_to_json, scene_to_svg, Config, Primitive, Scene,
};
use pretty_assertions::assert_eq;

// ─── Scene helpers ──────────────────────────────────────────────────

/// Filled circles (fretted-note dots) as (cx, cy, r, fill).
fn dots(scene: &Scene) -> Vec<(f64, f64, f64, String)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle {
                cx,
                cy,
                r,
                fill: Some(fill),
                ..
            } => Some((*cx, *cy, *r, fill.clone())),
            _ => None,
        })
        .collect()
}

/// Unfilled circles (open-string markers) as (cx, cy, r).
fn open_markers(scene: &Scene) -> Vec<(f64, f64, f64)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle {
                cx, cy, r, fill: None, ..
            } => Some((*cx, *cy, *r)),
            _ => None,
        })
        .collect()
}

/// Text primitives as (x, y, content).
fn texts(scene: &Scene) -> Vec<(f64, f64, String)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { x, y, content, .. } => Some((*x, *y, content.clone())),
            _ => None,
        })
        .collect()
}

fn line_count(scene: &Scene) -> usize {
    scene
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { .. }))
        .count()
}

// ─── Geometry ───────────────────────────────────────────────────────

#[test]
fn canvas_geometry_matches_configuration() {
    let config = Config::default(); // 6 strings x 20, 5 frets x 30

    let plain = render_chord_diagram(&[], &config, None, 1);
    assert_eq!(plain.width, 120.0);
    assert_eq!(plain.height, 180.0);

    let titled = render_chord_diagram(&[], &config, Some("G"), 1);
    assert_eq!(titled.width, 120.0);
    assert_eq!(titled.height, 200.0);
}

#[test]
fn grid_has_one_line_per_fret_and_string() {
    let config = Config::default();
    let scene = render_chord_diagram(&[], &config, None, 1);

    // fret_count + 1 horizontal lines plus string_count vertical lines
    assert_eq!(line_count(&scene), 12);
}

#[test]
fn fretted_markers_are_centered_in_their_cells() {
    let config = Config::default();
    let events = parse_notation("3 2 2");
    let scene = render_chord_diagram(&events, &config, None, 1);

    // String 3 is 0-based index 2: x = 2 * 20. Fret 2 centers at 1.5 * 30.
    assert_eq!(dots(&scene), vec![(40.0, 45.0, 8.0, "#4287f5".to_string())]);

    // Finger label sits on the dot center.
    assert_eq!(texts(&scene), vec![(40.0, 45.0, "2".to_string())]);
}

#[test]
fn title_band_offsets_grid_and_markers() {
    let config = Config::default();
    let events = parse_notation("3 2 2\n1 0");
    let scene = render_chord_diagram(&events, &config, Some("X major"), 1);

    assert_eq!(dots(&scene), vec![(40.0, 65.0, 8.0, "#4287f5".to_string())]);
    // Open marker rides 10 above the grid top, which now sits at 20.
    assert_eq!(open_markers(&scene), vec![(0.0, 10.0, 5.0)]);
}

#[test]
fn lefty_mirroring_is_an_involution_on_string_position() {
    let righty = Config::default();
    let lefty = Config {
        lefty: true,
        ..Config::default()
    };

    for string in 1..=6 {
        let notation = format!("{string} 2");
        let events = parse_notation(&notation);

        let x_righty = dots(&render_chord_diagram(&events, &righty, None, 1))[0].0;
        let x_lefty = dots(&render_chord_diagram(&events, &lefty, None, 1))[0].0;

        let mirrored = (righty.string_count - 1) as f64 * righty.string_spacing - x_righty;
        assert_eq!(x_lefty, mirrored, "string {string} should mirror");

        // Mirroring the mirrored position lands back on the original.
        assert_eq!(
            (righty.string_count - 1) as f64 * righty.string_spacing - x_lefty,
            x_righty
        );
    }
}

// ─── Markers ────────────────────────────────────────────────────────

#[test]
fn open_and_muted_markers_sit_above_the_grid() {
    let config = Config::default();
    let events = parse_notation("1 0\n2 -1");
    let scene = render_chord_diagram(&events, &config, None, 1);

    assert_eq!(open_markers(&scene), vec![(0.0, -10.0, 5.0)]);
    assert_eq!(texts(&scene), vec![(20.0, -10.0, "X".to_string())]);
}

#[test]
fn scale_rendering_drops_muted_events() {
    let config = Config::default();
    let events = parse_notation("1 0\n2 -1\n3 2");

    let scene = render_scale_diagram(&events, &config, None);

    assert_eq!(open_markers(&scene).len(), 1);
    assert_eq!(dots(&scene).len(), 1);
    assert!(texts(&scene).is_empty(), "no X marker in a scale diagram");
}

#[test]
fn out_of_range_strings_are_skipped_not_drawn() {
    let config = Config::default();
    let events = parse_notation("9 3\n0 2\n1 1");

    let scene = render_chord_diagram(&events, &config, None, 1);

    // Only "1 1" survives: string 9 and the 1-based 0 (parsed as -1) are out
    // of range on a 6-string instrument.
    assert_eq!(dots(&scene).len(), 1);
    assert_eq!(dots(&scene)[0].0, 0.0);
}

#[test]
fn show_dots_and_show_fingers_toggles() {
    let events = parse_notation("3 2 2");

    let no_dots = Config {
        show_dots: false,
        ..Config::default()
    };
    let scene = render_chord_diagram(&events, &no_dots, None, 1);
    assert!(dots(&scene).is_empty());
    assert_eq!(texts(&scene).len(), 1, "finger label still drawn");

    let no_fingers = Config {
        show_fingers: false,
        ..Config::default()
    };
    let scene = render_chord_diagram(&events, &no_fingers, None, 1);
    assert_eq!(dots(&scene).len(), 1);
    assert!(texts(&scene).is_empty());
}

#[test]
fn starting_fret_above_one_is_labeled() {
    let config = Config::default();
    let events = parse_notation("1 1");

    let fragment = render_chord_diagram(&events, &config, None, 5);
    assert_eq!(texts(&fragment), vec![(-15.0, 15.0, "5".to_string())]);

    // Fret 1 is the implicit nut position; no label.
    let nut = render_chord_diagram(&events, &config, None, 1);
    assert!(texts(&nut).is_empty());
}

// ─── Named chords & titles ──────────────────────────────────────────

#[test]
fn named_chord_lookup_is_case_sensitive_and_exact() {
    let config = Config::default();

    assert!(render_named_chord_svg("G", &config).is_some());
    assert!(render_named_chord_svg("g", &config).is_none());
    assert!(render_named_chord_svg("Gmaj7", &config).is_none());
}

#[test]
fn named_chord_draws_its_title() {
    let config = Config::default();
    let scene = fretlib::render_named_chord("G", &config).unwrap();

    let title: Vec<_> = texts(&scene)
        .into_iter()
        .filter(|(_, _, t)| t == "G")
        .collect();
    assert_eq!(title, vec![(60.0, 15.0, "G".to_string())]);
    assert_eq!(scene.height, 200.0);
}

#[test]
fn chord_block_matching_a_library_name_renders_named() {
    let config = Config::default();

    let svg = render_chord_svg("  G  ", &config);
    assert!(svg.contains(">G</text>"), "library block renders with title");
    assert!(svg.contains("viewBox=\"0 0 120 200\""), "title band reserved");

    // Plain notation blocks stay untitled.
    let svg = render_chord_svg("1 0\n2 1 1", &config);
    assert!(svg.contains("viewBox=\"0 0 120 180\""));
    assert!(!svg.contains(">G</text>"));
}

// ─── SVG output ─────────────────────────────────────────────────────

#[test]
fn svg_output_is_well_formed_xml() {
    let config = Config::default();
    let svg = render_named_chord_svg("Am7", &config).unwrap();

    let doc = roxmltree::Document::parse(&svg).expect("renderer emits well-formed XML");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 120 200"));
    assert!(root
        .attribute("style")
        .is_some_and(|s| s.contains("#ffffff")));

    // Am7: three opens, two fretted dots, 12 grid lines, title + 2 fingers.
    let count = |tag: &str| doc.descendants().filter(|n| n.has_tag_name(tag)).count();
    assert_eq!(count("circle"), 5);
    assert_eq!(count("line"), 12);
    assert_eq!(count("text"), 3);
}

#[test]
fn svg_text_content_is_escaped() {
    let config = Config::default();
    let scene = render_chord_diagram(&[], &config, Some("R&B <jam>"), 1);
    let svg = scene_to_svg(&scene);

    assert!(svg.contains("R&amp;B &lt;jam&gt;"));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let title = doc
        .descendants()
        .find(|n| n.has_tag_name("text"))
        .and_then(|n| n.text());
    assert_eq!(title, Some("R&B <jam>"));
}

#[test]
fn scale_svg_renders_template_notation() {
    let config = Config::default();
    let svg = render_scale_svg(fretlib::library::SCALE_TEMPLATE, &config);

    let doc = roxmltree::Document::parse(&svg).unwrap();
    // Template: two opens (1 0, 2 0) and six fretted notes without fingers.
    let circles = doc
        .descendants()
        .filter(|n| n.has_tag_name("circle"))
        .count();
    assert_eq!(circles, 8);
}

#[test]
fn scene_serializes_to_json() {
    let config = Config::default();
    let scene = fretlib::render_named_chord("Em", &config).unwrap();

    let json = scene_to_json(&scene).expect("scene should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["width"], 120.0);
    assert!(value["primitives"].as_array().is_some_and(|p| !p.is_empty()));
}
