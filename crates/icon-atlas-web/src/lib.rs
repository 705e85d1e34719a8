//! Browser bridge for `icon-atlas`.
//!
//! The page calls `atlas_init()` once, loads its manifest with
//! `atlas_load_manifest(json)`, then asks for icons by name. Frame arguments
//! left `undefined` fall back to the configured defaults. Failures come back
//! as thrown JS `Error`s.

pub mod runner;

pub use runner::IconRunner;

use std::cell::RefCell;

use icon_atlas::{AtlasError, FrameOptions};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<IconRunner> = RefCell::new(IconRunner::default());
}

fn with_runner<R>(f: impl FnOnce(&mut IconRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

fn to_js(err: AtlasError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn frame_options(
    color: Option<String>,
    border_width: Option<f64>,
    glow_radius: Option<f64>,
    title: Option<String>,
) -> FrameOptions {
    FrameOptions {
        color,
        border_width,
        glow_radius,
        title,
    }
}

#[wasm_bindgen]
pub fn atlas_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("icon-atlas: initialized");
}

/// Load (or replace) the icon manifest. Returns the number of icons.
#[wasm_bindgen]
pub fn atlas_load_manifest(json: &str) -> Result<usize, JsValue> {
    with_runner(|r| r.load_manifest(json)).map_err(to_js)
}

#[wasm_bindgen]
pub fn atlas_icon_style(
    name: &str,
    size: f64,
    color: Option<String>,
    border_width: Option<f64>,
    glow_radius: Option<f64>,
    title: Option<String>,
) -> Result<String, JsValue> {
    let frame = frame_options(color, border_width, glow_radius, title);
    with_runner(|r| r.icon_style(name, size, &frame)).map_err(to_js)
}

#[wasm_bindgen]
pub fn atlas_icon_html(
    name: &str,
    size: f64,
    color: Option<String>,
    border_width: Option<f64>,
    glow_radius: Option<f64>,
    title: Option<String>,
) -> Result<String, JsValue> {
    let frame = frame_options(color, border_width, glow_radius, title);
    with_runner(|r| r.icon_html(name, size, &frame)).map_err(to_js)
}

/// Placement as JSON (`rect`, `scale`, `sheetSize`, `offset`, `frame`, `role`, `label`).
#[wasm_bindgen]
pub fn atlas_icon_placement(
    name: &str,
    size: f64,
    color: Option<String>,
    border_width: Option<f64>,
    glow_radius: Option<f64>,
    title: Option<String>,
) -> Result<String, JsValue> {
    let frame = frame_options(color, border_width, glow_radius, title);
    with_runner(|r| r.icon_placement_json(name, size, &frame)).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_atlas::{AtlasMeta, SpriteDescriptor};

    #[test]
    fn frame_arguments_pass_through() {
        let frame = frame_options(Some("#ff8000".into()), Some(3.0), Some(24.0), None);
        assert_eq!(
            frame,
            FrameOptions::default()
                .with_color("#ff8000")
                .with_border_width(3.0)
                .with_glow_radius(24.0)
        );

        let meta = AtlasMeta::new(440.0, 440.0).with_grid(10, 10);
        let sprite = SpriteDescriptor::indexed("x", 0);
        let p = icon_atlas::place(&meta, &sprite, 44.0, &frame).unwrap();
        let style = p.frame.unwrap();
        assert_eq!((style.border_width, style.glow_radius), (3.0, 24.0));
    }

    #[test]
    fn missing_frame_arguments_use_defaults() {
        let frame = frame_options(Some("gold".into()), None, None, Some("Gold".into()));
        let meta = AtlasMeta::new(440.0, 440.0).with_grid(10, 10);
        let sprite = SpriteDescriptor::indexed("x", 0);
        let p = icon_atlas::place(&meta, &sprite, 44.0, &frame).unwrap();
        let style = p.frame.unwrap();
        assert_eq!((style.border_width, style.glow_radius), (2.0, 16.0));
        assert_eq!(p.label, "Gold");
    }
}
