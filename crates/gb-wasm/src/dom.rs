//! Writes studio state back into the host page.
//!
//! Element IDs and classes are the ones the banner page markup uses.

use gb_core::{Alignment, AlignmentGroup};
use gb_editor::Readouts;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub const PREVIEW_SVG_ID: &str = "gradientSvg";
pub const ANGLE_READOUT_ID: &str = "angleValue";
pub const START_HEX_ID: &str = "startColorHex";
pub const END_HEX_ID: &str = "endColorHex";
pub const FONT_SIZE_READOUT_ID: &str = "fontSizeValue";
pub const GUIDE_TOGGLE_ID: &str = "safeAreaToggle";
pub const ALIGNMENT_BUTTONS: &str = ".alignment-button";

pub struct Page {
    document: Document,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::trace!("no #{id} readout on page"),
        }
    }

    pub fn write_readouts(&self, readouts: &Readouts) {
        self.set_text(ANGLE_READOUT_ID, &readouts.angle);
        self.set_text(START_HEX_ID, &readouts.start_hex);
        self.set_text(END_HEX_ID, &readouts.end_hex);
        self.set_text(FONT_SIZE_READOUT_ID, &readouts.font_size);
    }

    /// Replace the contents of the preview `<svg>`.
    pub fn render_preview(&self, markup: &str) -> Result<(), JsValue> {
        let svg = self
            .document
            .get_element_by_id(PREVIEW_SVG_ID)
            .ok_or_else(|| JsValue::from_str("preview <svg> not found"))?;
        svg.set_inner_html(markup);
        Ok(())
    }

    /// Mark the active alignment button; the rest lose `active`.
    pub fn mark_alignment(&self, group: &AlignmentGroup) -> Result<(), JsValue> {
        let buttons = self.document.query_selector_all(ALIGNMENT_BUTTONS)?;
        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else {
                continue;
            };
            let button: Element = node.dyn_into()?;
            let active = button
                .get_attribute("data-align")
                .and_then(|v| v.parse::<Alignment>().ok())
                .is_some_and(|a| group.is_active(a));
            button.class_list().toggle_with_force("active", active)?;
        }
        Ok(())
    }

    pub fn mark_guide_toggle(&self, active: bool) -> Result<(), JsValue> {
        if let Some(toggle) = self.document.get_element_by_id(GUIDE_TOGGLE_ID) {
            toggle.class_list().toggle_with_force("active", active)?;
        }
        Ok(())
    }
}
