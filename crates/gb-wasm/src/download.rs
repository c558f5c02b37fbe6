//! Browser save sink: Blob → object URL → temporary `<a download>` click.

use gb_editor::{ExportDocument, SaveSink};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// An object URL for one export. Dropping it schedules revocation after
/// `revoke_delay_ms`, long enough for the download to start.
pub struct ObjectUrl {
    url: String,
    revoke_delay_ms: i32,
}

impl ObjectUrl {
    pub fn for_document(document: &ExportDocument, revoke_delay_ms: i32) -> Result<Self, JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(&document.content));
        let options = BlobPropertyBag::new();
        options.set_type(document.media_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        Ok(Self {
            url,
            revoke_delay_ms,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let url = std::mem::take(&mut self.url);
        let revoke = move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                log::warn!("revoking {url} failed: {}", crate::js_error(e));
            }
        };

        let Some(window) = web_sys::window() else {
            revoke();
            return;
        };
        let callback = Closure::once_into_js(revoke);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            self.revoke_delay_ms,
        ) {
            log::warn!("could not schedule object URL revoke: {}", crate::js_error(e));
        }
    }
}

/// Saves exports through the browser's download mechanism.
pub struct BrowserDownload {
    document: Document,
    revoke_delay_ms: i32,
}

impl BrowserDownload {
    pub fn new(document: Document, revoke_delay_ms: i32) -> Self {
        Self {
            document,
            revoke_delay_ms,
        }
    }

    fn trigger(&self, export: &ExportDocument) -> Result<(), JsValue> {
        let url = ObjectUrl::for_document(export, self.revoke_delay_ms)?;

        let link: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        link.set_href(url.as_str());
        link.set_download(&export.filename);
        link.set_target("_blank");

        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no <body>"))?;
        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;

        log::debug!("download triggered for {}", export.filename);
        Ok(())
    }
}

impl SaveSink for BrowserDownload {
    fn save(&mut self, document: &ExportDocument) -> Result<(), String> {
        self.trigger(document).map_err(crate::js_error)
    }
}
