//! Parameter → attribute binders.
//!
//! Each binder is a plain function over the scene graph and the handles it
//! needs, run synchronously in response to one control input. Binders are
//! pure in their inputs: running one twice with the same parameters leaves
//! the same attributes behind.

use crate::builder::SceneHandles;
use gb_core::emitter::fmt_number;
use gb_core::gradient::GradientParams;
use gb_core::model::*;
use gb_core::{Alignment, CanvasConfig, layout_lines};
use serde::Serialize;

/// Text shown next to the controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Readouts {
    /// `"90°"`
    pub angle: String,
    /// `"#AABBCC"`
    pub start_hex: String,
    pub end_hex: String,
    /// `"100px"`
    pub font_size: String,
}

/// Write gradient endpoints and stop colors, and refresh the gradient readouts.
pub fn update_gradient(
    graph: &mut SceneGraph,
    handles: &SceneHandles,
    params: &GradientParams,
    readouts: &mut Readouts,
) {
    let vector = params.vector();
    if let Some(NodeKind::LinearGradient { vector: v }) = graph.kind_mut(handles.gradient) {
        *v = Some(vector);
    }
    set_stop_color(graph, handles.stop_start, params.start);
    set_stop_color(graph, handles.stop_end, params.end);

    readouts.angle = format!("{}°", fmt_number(params.angle));
    readouts.start_hex = params.start.to_hex_upper();
    readouts.end_hex = params.end.to_hex_upper();

    log::debug!(
        "gradient {}° {} → {}: ({:.2}%, {:.2}%) → ({:.2}%, {:.2}%)",
        params.angle,
        readouts.start_hex,
        readouts.end_hex,
        vector.x1,
        vector.y1,
        vector.x2,
        vector.y2
    );
}

fn set_stop_color(graph: &mut SceneGraph, stop: gb_core::NodeIndex, value: Color) {
    if let Some(NodeKind::GradientStop { color, .. }) = graph.kind_mut(stop) {
        *color = Some(value);
    }
}

/// Replace every line fragment under the text node with a fresh layout of
/// `content`, positioned at the text node's current x.
pub fn update_text(
    graph: &mut SceneGraph,
    handles: &SceneHandles,
    content: &str,
    font_size_px: u32,
    config: &CanvasConfig,
) {
    let Some(x) = graph.text(handles.text).map(|t| t.x) else {
        return;
    };
    graph.clear_children(handles.text);
    for line in layout_lines(content, font_size_px, x, config) {
        graph.add_node(handles.text, SceneNode::anonymous(NodeKind::Line(line)));
    }
}

pub fn update_text_color(graph: &mut SceneGraph, handles: &SceneHandles, color: Color) {
    if let Some(text) = graph.text_mut(handles.text) {
        text.fill = Some(color);
    }
}

/// Set the font size. Existing fragments keep their layout; their `em`
/// offsets follow the new size.
pub fn update_font_size(
    graph: &mut SceneGraph,
    handles: &SceneHandles,
    size_px: u32,
    readouts: &mut Readouts,
) {
    if let Some(text) = graph.text_mut(handles.text) {
        text.size_px = size_px;
    }
    readouts.font_size = format!("{size_px}px");
}

pub fn update_font_weight(graph: &mut SceneGraph, handles: &SceneHandles, weight: FontWeight) {
    if let Some(text) = graph.text_mut(handles.text) {
        text.weight = weight;
    }
}

pub fn update_font_family(graph: &mut SceneGraph, handles: &SceneHandles, family: FontFamily) {
    if let Some(text) = graph.text_mut(handles.text) {
        text.family = family;
    }
}

/// Move the text node and all of its fragments to `alignment`'s anchor and x.
pub fn apply_alignment(
    graph: &mut SceneGraph,
    handles: &SceneHandles,
    alignment: Alignment,
    config: &CanvasConfig,
) {
    let anchor = alignment.anchor();
    let x = alignment.x(config);

    if let Some(text) = graph.text_mut(handles.text) {
        text.anchor = anchor;
        text.x = x;
    }
    graph.for_each_line_mut(handles.text, |line| line.x = x);

    log::debug!("aligned {alignment}: anchor {}, x = {x}", anchor.as_str());
}

/// Flip the guide overlay. Returns the new visibility.
pub fn toggle_guide(graph: &mut SceneGraph, handles: &SceneHandles) -> bool {
    match graph.guide_mut(handles.guide) {
        Some(guide) => {
            guide.visible = !guide.visible;
            guide.visible
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_scene;

    fn scene() -> (SceneGraph, SceneHandles) {
        build_scene(&CanvasConfig::default(), FontFamily::Montserrat)
    }

    #[test]
    fn gradient_writes_vector_stops_and_readouts() {
        let (mut graph, handles) = scene();
        let mut readouts = Readouts::default();
        let params = GradientParams {
            start: Color::from_hex("#aabbcc").unwrap(),
            end: Color::from_hex("#112233").unwrap(),
            angle: 90.0,
        };
        update_gradient(&mut graph, &handles, &params, &mut readouts);

        assert_eq!(
            graph.node(handles.gradient).map(|n| &n.kind),
            Some(&NodeKind::LinearGradient {
                vector: Some(gb_core::GradientVector {
                    x1: 100.0,
                    y1: 50.0,
                    x2: 0.0,
                    y2: 50.0
                })
            })
        );
        assert_eq!(readouts.angle, "90°");
        assert_eq!(readouts.start_hex, "#AABBCC");
        assert_eq!(readouts.end_hex, "#112233");
    }

    #[test]
    fn text_rebuild_discards_old_fragments() {
        let (mut graph, handles) = scene();
        let config = CanvasConfig::default();

        update_text(&mut graph, &handles, "one\ntwo\nthree", 100, &config);
        assert_eq!(graph.lines(handles.text).len(), 3);

        update_text(&mut graph, &handles, "only", 100, &config);
        let lines = graph.lines(handles.text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content, "only");
        assert_eq!(lines[0].y, 300.0);
    }

    #[test]
    fn alignment_moves_text_and_fragments() {
        let (mut graph, handles) = scene();
        let config = CanvasConfig::default();
        update_text(&mut graph, &handles, "a\nb", 100, &config);

        apply_alignment(&mut graph, &handles, Alignment::Right, &config);
        let text = graph.text(handles.text).unwrap();
        assert_eq!(text.anchor, TextAnchor::End);
        assert_eq!(text.x, 1250.0);
        assert!(graph.lines(handles.text).iter().all(|l| l.x == 1250.0));
    }

    #[test]
    fn new_fragments_inherit_current_x() {
        let (mut graph, handles) = scene();
        let config = CanvasConfig::default();
        apply_alignment(&mut graph, &handles, Alignment::Left, &config);
        update_text(&mut graph, &handles, "left side", 100, &config);
        assert_eq!(graph.lines(handles.text)[0].x, 250.0);
    }

    #[test]
    fn font_size_does_not_relayout() {
        let (mut graph, handles) = scene();
        let mut readouts = Readouts::default();
        update_text(&mut graph, &handles, "a\nb", 100, &CanvasConfig::default());

        update_font_size(&mut graph, &handles, 40, &mut readouts);
        assert_eq!(readouts.font_size, "40px");
        assert_eq!(graph.text(handles.text).unwrap().size_px, 40);
        assert_eq!(graph.lines(handles.text)[0].y, 240.0);
    }

    #[test]
    fn guide_toggles() {
        let (mut graph, handles) = scene();
        assert!(toggle_guide(&mut graph, &handles));
        assert!(graph.is_guide_visible(handles.guide));
        assert!(!toggle_guide(&mut graph, &handles));
    }
}
