//! Fixed geometry and constants of the banner canvas.
//!
//! The canvas size is fixed. Everything else has a `Default` that
//! reproduces the stock banner; hosts may override those fields through
//! JSON, and missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Google Fonts stylesheet for every family offered by the font picker.
pub const FONT_IMPORT_URL: &str = "https://fonts.googleapis.com/css2?family=Montserrat:wght@300;400;500;600;700;800;900&family=Inter:wght@300;400;500;600;700;800;900&family=Playfair+Display:wght@400;500;600;700;800;900&display=swap";

/// Banner width in user units, also the exported `width`.
pub const CANVAS_WIDTH: f64 = 1500.0;
/// Banner height in user units, also the exported `height`.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Media type handed to the save sink with every export.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml;charset=utf-8";

/// The guide rectangle used for alignment and centering math.
///
/// Not a clip region: text may overflow it freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceZone {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ReferenceZone {
    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self {
            x: 200.0,
            y: 150.0,
            width: 1100.0,
            height: 300.0,
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for the banner scene and its exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub zone: ReferenceZone,
    /// Stroke paint of the on-screen guide.
    pub guide_stroke: String,
    pub guide_dasharray: String,

    /// Distance from the zone edge for left/right aligned text. Default: **50**.
    pub align_inset: f64,

    /// Line spacing as a multiple of the font size. Default: **1.2**.
    pub line_height: f64,

    /// Baseline that multi-line blocks are centered on. Default: **300**,
    /// the reference-zone height rather than the canvas midline.
    pub center_y: f64,

    pub font_import_url: String,

    /// Delay before a download's object URL is revoked. Default: **100 ms**.
    pub revoke_delay_ms: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zone: ReferenceZone::default(),
            guide_stroke: "#ff00ff80".into(),
            guide_dasharray: "5,5".into(),
            align_inset: 50.0,
            line_height: 1.2,
            center_y: 300.0,
            font_import_url: FONT_IMPORT_URL.into(),
            revoke_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_zone_edges() {
        let zone = ReferenceZone::default();
        assert_eq!(zone.left(), 200.0);
        assert_eq!(zone.right(), 1300.0);
        assert_eq!(zone.center_x(), 750.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{ "align_inset": 80, "revoke_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.align_inset, 80.0);
        assert_eq!(config.revoke_delay_ms, 250);
        assert_eq!(config.center_y, 300.0);
        assert_eq!(config.zone, ReferenceZone::default());
    }

    #[test]
    fn canvas_size_is_not_configurable() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{ "width": 1200, "height": 400 }"#).unwrap();
        assert_eq!(config, CanvasConfig::default());
    }
}
