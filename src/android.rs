//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::config::Config;
use crate::{render_chord_svg, render_named_chord_svg, render_scale_svg};

/// Read the settings document from an optional Java string.
/// Null and malformed documents resolve to the defaults.
fn config_from_java(env: &mut JNIEnv, settings_json: &JString) -> Config {
    if settings_json.is_null() {
        return Config::default();
    }
    match env.get_string(settings_json) {
        Ok(s) => Config::from_json(&String::from(s)),
        Err(_) => Config::default(),
    }
}

/// Render chord notation to SVG.
///
/// Called from Kotlin as:
///   external fun renderChord(notation: String, settingsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderChord(
    mut env: JNIEnv,
    _class: JClass,
    notation: JString,
    settings_json: JString,
) -> jstring {
    let text: String = match env.get_string(&notation) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let config = config_from_java(&mut env, &settings_json);

    let svg = render_chord_svg(&text, &config);
    match env.new_string(&svg) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render scale notation to SVG.
///
/// Called from Kotlin as:
///   external fun renderScale(notation: String, settingsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderScale(
    mut env: JNIEnv,
    _class: JClass,
    notation: JString,
    settings_json: JString,
) -> jstring {
    let text: String = match env.get_string(&notation) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let config = config_from_java(&mut env, &settings_json);

    let svg = render_scale_svg(&text, &config);
    match env.new_string(&svg) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a library chord by name; returns null on an unknown name.
///
/// Called from Kotlin as:
///   external fun renderNamedChord(name: String, settingsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderNamedChord(
    mut env: JNIEnv,
    _class: JClass,
    name: JString,
    settings_json: JString,
) -> jstring {
    let name: String = match env.get_string(&name) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let config = config_from_java(&mut env, &settings_json);

    match render_named_chord_svg(&name, &config) {
        Some(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        None => std::ptr::null_mut(),
    }
}
