//! WASM bridge for the gradient banner studio.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards each
//! control's `input`/`change` event to `BannerStudio`; every call updates
//! the scene, then re-renders the preview and readouts before returning.

mod dom;
mod download;

use dom::Page;
use download::BrowserDownload;
use gb_core::model::{Color, FontFamily, FontWeight};
use gb_core::{Alignment, CanvasConfig};
use gb_editor::{ControlInput, Studio};
use wasm_bindgen::prelude::*;

pub use download::ObjectUrl;

/// The page-facing studio controller.
///
/// Owns the `Studio` exclusively; the page holds one instance for its
/// lifetime.
#[wasm_bindgen]
pub struct BannerStudio {
    studio: Studio,
    page: Page,
}

#[wasm_bindgen]
impl BannerStudio {
    /// Create a studio using the page's initially selected font family and
    /// checked text color, and render it.
    #[wasm_bindgen(constructor)]
    pub fn new(font_family: &str, text_color: &str) -> Result<BannerStudio, JsValue> {
        Self::build(CanvasConfig::default(), font_family, text_color)
    }

    /// Like `new`, with a JSON `CanvasConfig` override (missing fields keep
    /// their defaults).
    pub fn with_config(
        config_json: &str,
        font_family: &str,
        text_color: &str,
    ) -> Result<BannerStudio, JsValue> {
        let config: CanvasConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid canvas config: {e}")))?;
        Self::build(config, font_family, text_color)
    }

    /// Apply a control change by control name (`startColor`, `angle`,
    /// `fontWeight`, …) and raw control value.
    pub fn set_control(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        let input = control_input(name, value).map_err(to_js)?;
        self.apply(input)
    }

    pub fn set_start_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::StartColor(hex.parse().map_err(to_js)?))
    }

    pub fn set_end_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::EndColor(hex.parse().map_err(to_js)?))
    }

    pub fn set_angle(&mut self, degrees: f64) -> Result<(), JsValue> {
        self.apply(ControlInput::Angle(degrees))
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::Text(text.to_string()))
    }

    pub fn set_font_family(&mut self, family: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::FontFamily(family.parse().map_err(to_js)?))
    }

    pub fn set_font_size(&mut self, size_px: u32) -> Result<(), JsValue> {
        self.apply(ControlInput::FontSize(size_px))
    }

    pub fn set_font_weight(&mut self, weight: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::FontWeight(weight.parse().map_err(to_js)?))
    }

    pub fn set_text_color(&mut self, hex: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::TextColor(hex.parse().map_err(to_js)?))
    }

    /// `left`, `center` or `right` (the button's `data-align`).
    pub fn set_alignment(&mut self, align: &str) -> Result<(), JsValue> {
        self.apply(ControlInput::Align(align.parse().map_err(to_js)?))
    }

    /// Flip the guide overlay. Returns whether it is now visible.
    pub fn toggle_guide(&mut self) -> Result<bool, JsValue> {
        self.apply(ControlInput::ToggleGuide)?;
        Ok(self.studio.guide_visible())
    }

    /// Export the banner as an SVG download. Returns the filename.
    pub fn export(&mut self) -> Result<String, JsValue> {
        let mut sink = BrowserDownload::new(
            self.page.document().clone(),
            self.studio.config().revoke_delay_ms,
        );
        let filename = self.studio.export_to(&mut sink).map_err(to_js)?;
        self.refresh()?;
        Ok(filename)
    }

    /// The standalone SVG text an export would produce, without downloading.
    pub fn export_markup(&mut self) -> String {
        self.studio.export_document().content
    }

    /// Inner markup of the preview `<svg>`.
    pub fn preview_markup(&self) -> String {
        self.studio.preview_markup()
    }

    /// Current control values as JSON.
    pub fn params_json(&self) -> String {
        match serde_json::to_string(self.studio.params()) {
            Ok(json) => json,
            Err(e) => format!(r#"{{"error":"Serialization error: {e}"}}"#),
        }
    }

    /// Readout strings as JSON.
    pub fn readouts_json(&self) -> String {
        match serde_json::to_string(self.studio.readouts()) {
            Ok(json) => json,
            Err(e) => format!(r#"{{"error":"Serialization error: {e}"}}"#),
        }
    }
}

impl BannerStudio {
    fn build(
        config: CanvasConfig,
        font_family: &str,
        text_color: &str,
    ) -> Result<BannerStudio, JsValue> {
        init_logging();

        let family: FontFamily = font_family.parse().map_err(to_js)?;
        let text_color: Color = text_color.parse().map_err(to_js)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;

        let studio = BannerStudio {
            studio: Studio::new(config, family, text_color),
            page: Page::new(document),
        };
        studio.refresh()?;
        Ok(studio)
    }

    fn apply(&mut self, input: ControlInput) -> Result<(), JsValue> {
        self.studio.apply(input);
        self.refresh()
    }

    fn refresh(&self) -> Result<(), JsValue> {
        self.page.render_preview(&self.studio.preview_markup())?;
        self.page.write_readouts(self.studio.readouts());
        self.page.mark_alignment(self.studio.alignment())?;
        self.page.mark_guide_toggle(self.studio.guide_visible())
    }
}

/// Map a page control name and its raw value to a `ControlInput`.
fn control_input(name: &str, value: &str) -> Result<ControlInput, String> {
    Ok(match name {
        "startColor" => ControlInput::StartColor(value.parse()?),
        "endColor" => ControlInput::EndColor(value.parse()?),
        "angle" | "angleSlider" => ControlInput::Angle(
            value
                .trim()
                .parse()
                .map_err(|_| format!("invalid angle: {value:?}"))?,
        ),
        "text" | "textInput" => ControlInput::Text(value.to_string()),
        "fontFamily" => ControlInput::FontFamily(value.parse::<FontFamily>()?),
        "fontSize" | "fontSizeSlider" => ControlInput::FontSize(
            value
                .trim()
                .parse()
                .map_err(|_| format!("invalid font size: {value:?}"))?,
        ),
        "fontWeight" => ControlInput::FontWeight(value.parse::<FontWeight>()?),
        "textColor" => ControlInput::TextColor(value.parse()?),
        "align" => ControlInput::Align(value.parse::<Alignment>()?),
        "safeAreaToggle" => ControlInput::ToggleGuide,
        other => return Err(format!("unknown control: {other:?}")),
    })
}

fn to_js(message: String) -> JsValue {
    JsValue::from_str(&message)
}

pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Route `log` output and panics to the browser console. Safe to call repeatedly.
fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"gb-wasm: a logger was already installed".into());
        }
        log::info!("gradient banner studio loaded");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_control_names() {
        assert_eq!(
            control_input("startColor", "#aabbcc"),
            Ok(ControlInput::StartColor(Color::rgb(0xAA, 0xBB, 0xCC)))
        );
        assert_eq!(control_input("angleSlider", "270"), Ok(ControlInput::Angle(270.0)));
        assert_eq!(
            control_input("textInput", "Line one\nLine two"),
            Ok(ControlInput::Text("Line one\nLine two".into()))
        );
        assert_eq!(
            control_input("fontFamily", "Inter"),
            Ok(ControlInput::FontFamily(FontFamily::Inter))
        );
        assert_eq!(control_input("fontSize", "72"), Ok(ControlInput::FontSize(72)));
        assert_eq!(
            control_input("fontWeight", "900"),
            Ok(ControlInput::FontWeight(FontWeight::Black))
        );
        assert_eq!(
            control_input("align", "center"),
            Ok(ControlInput::Align(Alignment::Center))
        );
        assert_eq!(control_input("safeAreaToggle", ""), Ok(ControlInput::ToggleGuide));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(control_input("startColor", "red").is_err());
        assert!(control_input("textColor", "").is_err());
        assert!(control_input("fontSize", "big").is_err());
        assert!(control_input("align", "justify").is_err());
        assert!(control_input("opacity", "0.5").is_err());
    }
}
