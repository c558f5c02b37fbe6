//! SVG export: snapshot the live scene into a portable standalone document.
//!
//! The export copy differs from the preview in four ways: the guide overlay
//! is gone, the canvas size is pinned, a `<style>` block imports the web
//! fonts, and every line fragment carries the text node's x and anchor.

use crate::studio::Studio;
use gb_core::config::{CANVAS_HEIGHT, CANVAS_WIDTH, SVG_MEDIA_TYPE};
use gb_core::emitter::{XML_DECLARATION, emit_svg};
use gb_core::model::*;
use gb_core::{CanvasConfig, NodeIndex};

/// A serialized export, ready for a save sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub filename: String,
    pub content: String,
    pub media_type: &'static str,
}

impl ExportDocument {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Where finished exports go (browser download, file, test buffer).
pub trait SaveSink {
    fn save(&mut self, document: &ExportDocument) -> Result<(), String>;
}

/// Hides the guide for as long as it lives; restores the prior visibility on drop.
struct GuideHidden<'a> {
    graph: &'a mut SceneGraph,
    guide: NodeIndex,
    was_visible: bool,
}

impl<'a> GuideHidden<'a> {
    fn new(graph: &'a mut SceneGraph, guide: NodeIndex) -> Self {
        let was_visible = graph.is_guide_visible(guide);
        if let Some(g) = graph.guide_mut(guide) {
            g.visible = false;
        }
        Self {
            graph,
            guide,
            was_visible,
        }
    }
}

impl Drop for GuideHidden<'_> {
    fn drop(&mut self) {
        if let Some(g) = self.graph.guide_mut(self.guide) {
            g.visible = self.was_visible;
        }
    }
}

/// Longest slug prefix, in UTF-16 code units.
const SLUG_UNITS: usize = 20;

/// `{first line, ≤20 UTF-16 units, lowercased, whitespace runs → _}-{start}-{end}.svg`
///
/// A character whose surrogate pair would straddle the limit is dropped whole.
pub fn export_filename(text: &str, start: Color, end: Color) -> String {
    let first_line = text.split('\n').next().unwrap_or_default();
    let mut units = 0;
    let truncated: String = first_line
        .chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= SLUG_UNITS
        })
        .collect();

    let mut slug = String::with_capacity(truncated.len());
    let mut in_space = false;
    for c in truncated.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    format!("{slug}-{}-{}.svg", start.hex_digits(), end.hex_digits())
}

/// Stylesheet embedded in exports so they render without the preview's fonts.
pub fn font_stylesheet(config: &CanvasConfig, family: FontFamily, weight: FontWeight) -> String {
    format!(
        "\n@import url('{url}');\n\
         \n\
         text {{\n    font-family: '{family}', sans-serif;\n    font-weight: {weight};\n}}\n\
         \n\
         tspan {{\n    font-family: inherit;\n    font-weight: inherit;\n}}\n",
        url = config.font_import_url,
    )
}

impl Studio {
    /// Snapshot the current scene as an export document.
    pub fn export_document(&mut self) -> ExportDocument {
        let mut copy = {
            let hidden = GuideHidden::new(&mut self.graph, self.handles.guide);
            hidden.graph.clone()
        };

        // Hidden nodes never reach an exported file.
        let hidden_guides: Vec<NodeIndex> = copy
            .descendants()
            .into_iter()
            .filter(|&idx| matches!(&copy.graph[idx].kind, NodeKind::Guide(g) if !g.visible))
            .collect();
        for idx in hidden_guides {
            copy.remove_node(idx);
        }

        let root = copy.root;
        if let Some(NodeKind::Canvas { width, height, .. }) = copy.kind_mut(root) {
            *width = Some(CANVAS_WIDTH);
            *height = Some(CANVAS_HEIGHT);
        }

        let (x, anchor, family, weight) = match self.graph.text(self.handles.text) {
            Some(t) => (t.x, t.anchor, t.family, t.weight),
            None => (
                self.config.zone.center_x(),
                TextAnchor::Middle,
                self.params.family,
                self.params.weight,
            ),
        };
        copy.insert_first(
            root,
            SceneNode::anonymous(NodeKind::Style {
                css: font_stylesheet(&self.config, family, weight),
            }),
        );
        copy.for_each_line_mut(self.handles.text, |line| {
            line.x = x;
            line.anchor = Some(anchor);
        });

        let filename = export_filename(
            &self.params.text,
            self.params.gradient.start,
            self.params.gradient.end,
        );
        let content = format!("{XML_DECLARATION}\n{}", emit_svg(&copy));
        log::info!("exported {filename} ({} bytes)", content.len());

        ExportDocument {
            filename,
            content,
            media_type: SVG_MEDIA_TYPE,
        }
    }

    /// Export and hand the document to `sink`. Returns the saved filename.
    pub fn export_to(&mut self, sink: &mut impl SaveSink) -> Result<String, String> {
        let document = self.export_document();
        sink.save(&document)?;
        Ok(document.filename)
    }
}
