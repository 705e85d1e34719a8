use icon_atlas::{
    AtlasError, AtlasManifest, CssSurface, FrameOptions, IconConfig, IconRegistry, Placement,
};

/// Holds the loaded icon registry for the browser bridge.
///
/// The bridge keeps one runner in a `thread_local!` and exposes it through
/// free `#[wasm_bindgen]` functions.
pub struct IconRunner {
    registry: Option<IconRegistry>,
    config: IconConfig,
}

impl IconRunner {
    pub fn new(config: IconConfig) -> Self {
        Self { registry: None, config }
    }

    /// Parse and validate a manifest, replacing any previously loaded one.
    /// On error the previous registry stays in place.
    pub fn load_manifest(&mut self, json: &str) -> Result<usize, AtlasError> {
        let manifest = AtlasManifest::from_json(json)?;
        let registry = IconRegistry::from_manifest(&manifest)?.with_config(self.config.clone());
        let count = registry.len();
        self.registry = Some(registry);
        Ok(count)
    }

    pub fn is_loaded(&self) -> bool {
        self.registry.is_some()
    }

    fn registry(&self) -> Result<&IconRegistry, AtlasError> {
        self.registry.as_ref().ok_or(AtlasError::NotLoaded)
    }

    /// Inline `style` attribute value for a named icon.
    pub fn icon_style(
        &self,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<String, AtlasError> {
        let style = self.registry()?.compose(&CssSurface, name, size, frame)?;
        Ok(style.inline())
    }

    /// Complete `<div>` markup for a named icon.
    pub fn icon_html(
        &self,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<String, AtlasError> {
        let style = self.registry()?.compose(&CssSurface, name, size, frame)?;
        Ok(style.to_html())
    }

    pub fn icon_placement(
        &self,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<Placement, AtlasError> {
        self.registry()?.place(name, size, frame)
    }

    /// Placement serialized as JSON, for hosts that draw it themselves.
    pub fn icon_placement_json(
        &self,
        name: &str,
        size: f64,
        frame: &FrameOptions,
    ) -> Result<String, AtlasError> {
        let placement = self.icon_placement(name, size, frame)?;
        serde_json::to_string(&placement).map_err(AtlasError::Encode)
    }
}

impl Default for IconRunner {
    fn default() -> Self {
        Self::new(IconConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "atlases": [
            { "name": "heroes", "path": "/img/heroes.png",
              "imageWidth": 440, "imageHeight": 440, "columns": 10, "rows": 10 }
        ],
        "icons": {
            "vanguard": { "atlas": "heroes", "index": 23, "title": "Vanguard" }
        }
    }"#;

    fn loaded() -> IconRunner {
        let mut runner = IconRunner::default();
        assert_eq!(runner.load_manifest(JSON).unwrap(), 1);
        runner
    }

    #[test]
    fn not_loaded_is_an_error() {
        let runner = IconRunner::default();
        assert!(!runner.is_loaded());
        let err = runner.icon_style("vanguard", 44.0, &FrameOptions::default()).unwrap_err();
        assert!(matches!(err, AtlasError::NotLoaded));
    }

    #[test]
    fn style_for_named_icon() {
        let css = loaded()
            .icon_style("vanguard", 88.0, &FrameOptions::default().with_color("#a335ee"))
            .unwrap();
        assert!(css.contains("background-size: 880px 880px;"));
        assert!(css.contains("background-position: -264px -176px;"));
        assert!(css.contains("border: 2px solid #a335ee;"));
        assert!(css.contains("box-shadow: 0 0 16px #a335ee;"));
    }

    #[test]
    fn html_carries_label() {
        let html = loaded().icon_html("vanguard", 44.0, &FrameOptions::default()).unwrap();
        assert!(html.contains(r#"role="img" aria-label="Vanguard""#));
    }

    #[test]
    fn placement_json_is_camel_case() {
        let json = loaded()
            .icon_placement_json("vanguard", 88.0, &FrameOptions::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scale"], 2.0);
        assert_eq!(value["label"], "Vanguard");
        assert_eq!(value["rect"]["x"], 132.0);
    }

    #[test]
    fn failed_reload_keeps_previous_registry() {
        let mut runner = loaded();
        assert!(runner.load_manifest("not json").is_err());
        assert!(runner.icon_placement("vanguard", 44.0, &FrameOptions::default()).is_ok());
    }

    #[test]
    fn config_flows_into_registry() {
        let mut runner = IconRunner::new(IconConfig { border_width: 4.0, glow_radius: 8.0 });
        runner.load_manifest(JSON).unwrap();
        let p = runner
            .icon_placement("vanguard", 44.0, &FrameOptions::default().with_color("gold"))
            .unwrap();
        assert_eq!(p.frame.unwrap().border_width, 4.0);
    }
}
