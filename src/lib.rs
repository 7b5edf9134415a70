//! fretlib — guitar chord and scale diagram rendering library.
//!
//! Converts a compact positional notation — one `string fret [finger]`
//! position per line — into fretboard diagrams, for note-taking hosts that
//! splice rendered SVG into their markdown output. Fret `0` marks an open
//! string, a negative fret a muted string (chords only), and a positive
//! fret a normal fretted note.
//!
//! # Example
//! ```
//! use fretlib::{render_chord_svg, Config};
//!
//! let svg = render_chord_svg("1 0\n2 1 1\n3 2 2", &Config::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod library;
pub mod model;
pub mod parser;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{Config, ConfigOverrides};
pub use model::{Position, PositionKind};
pub use parser::parse_notation;
pub use renderer::scene::{Primitive, Scene};
pub use renderer::{
    render_chord_diagram, render_named_chord, render_scale_diagram, scene_to_svg,
};

/// Render a chord notation block to SVG.
///
/// When the trimmed block text is itself a chord name from the library,
/// the block renders as that named chord, title included — so a fenced
/// block containing just `G` produces the labeled G diagram.
pub fn render_chord_svg(text: &str, config: &Config) -> String {
    if let Some(svg) = render_named_chord_svg(text.trim(), config) {
        return svg;
    }
    let events = parse_notation(text);
    scene_to_svg(&render_chord_diagram(&events, config, None, 1))
}

/// Render a scale notation block to SVG.
pub fn render_scale_svg(text: &str, config: &Config) -> String {
    let events = parse_notation(text);
    scene_to_svg(&render_scale_diagram(&events, config, None))
}

/// Render a chord from the library by name, labeled with that name.
///
/// Returns `None` when the name is unknown so the caller can fall back to
/// leaving its original content untouched.
pub fn render_named_chord_svg(name: &str, config: &Config) -> Option<String> {
    render_named_chord(name, config).map(|scene| scene_to_svg(&scene))
}

/// Convert a rendered scene to a JSON string.
/// Useful for passing diagrams across FFI boundaries in place of SVG.
pub fn scene_to_json(scene: &Scene) -> Result<String, String> {
    serde_json::to_string_pretty(scene).map_err(|e| format!("JSON serialization error: {e}"))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read the settings document from an optional C string.
/// Null, invalid UTF-8, and malformed JSON all resolve to the defaults.
unsafe fn config_from_c(settings_json: *const c_char) -> Config {
    if settings_json.is_null() {
        return Config::default();
    }
    match unsafe { CStr::from_ptr(settings_json) }.to_str() {
        Ok(json) => Config::from_json(json),
        Err(_) => Config::default(),
    }
}

/// Render chord notation to SVG as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// `settings_json` is an optional JSON settings document; pass null to use
/// the defaults.
///
/// # Safety
/// `notation` must be a valid null-terminated UTF-8 C string;
/// `settings_json` may be null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_chord(
    notation: *const c_char,
    settings_json: *const c_char,
) -> *mut c_char {
    if notation.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(notation) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };
    let config = unsafe { config_from_c(settings_json) };

    let svg = render_chord_svg(text, &config);
    CString::new(svg).unwrap_or_default().into_raw()
}

/// Render scale notation to SVG as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `notation` must be a valid null-terminated UTF-8 C string;
/// `settings_json` may be null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_scale(
    notation: *const c_char,
    settings_json: *const c_char,
) -> *mut c_char {
    if notation.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(notation) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };
    let config = unsafe { config_from_c(settings_json) };

    let svg = render_scale_svg(text, &config);
    CString::new(svg).unwrap_or_default().into_raw()
}

/// Render a library chord by name to SVG as a C string.
/// Returns null when the name is not in the library.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 C string;
/// `settings_json` may be null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_named_chord(
    name: *const c_char,
    settings_json: *const c_char,
) -> *mut c_char {
    if name.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(name) };
    let name = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };
    let config = unsafe { config_from_c(settings_json) };

    match render_named_chord_svg(name, &config) {
        Some(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
