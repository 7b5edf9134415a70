//! SVG serialization — turns a [`Scene`] into a self-contained SVG string.

use super::scene::{Primitive, Scene};

/// Serialize a scene to a complete `<svg>` document string.
///
/// The output carries its own viewBox and background, so the host can
/// splice it into rendered markdown without additional styling.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" class="scales-chords-diagram" style="background-color: {};">"#,
        scene.width, scene.height, scene.width, scene.height, scene.background_color
    );
    svg.push('\n');

    for primitive in &scene.primitives {
        svg.push_str("  ");
        svg.push_str(&element(primitive));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn element(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ),
        Primitive::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        } => match stroke {
            Some(stroke) => format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                cx,
                cy,
                r,
                fill.as_deref().unwrap_or("none"),
                stroke,
                stroke_width
            ),
            None => format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                cx,
                cy,
                r,
                fill.as_deref().unwrap_or("none")
            ),
        },
        Primitive::Text {
            x,
            y,
            content,
            font_family,
            font_size,
            bold,
            color,
            middle_baseline,
        } => {
            let weight = if *bold { r#" font-weight="bold""# } else { "" };
            let baseline = if *middle_baseline {
                r#" dominant-baseline="middle""#
            } else {
                ""
            };
            format!(
                r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.1}" text-anchor="middle"{}{} fill="{}">{}</text>"#,
                x,
                y,
                font_family,
                font_size,
                weight,
                baseline,
                color,
                escape(content)
            )
        }
    }
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
