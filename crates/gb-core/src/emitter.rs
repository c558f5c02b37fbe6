//! Emitter: SceneGraph → SVG markup.
//!
//! Output matches what a browser's XML serializer produces for the same DOM:
//! attributes in the order they were first set, empty elements self-closed,
//! no insignificant whitespace, numbers stringified like ECMAScript doubles.

use crate::model::*;
use petgraph::graph::NodeIndex;
use smallvec::SmallVec;
use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Declaration prepended to exported documents.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

type Attrs = SmallVec<[(&'static str, String); 8]>;

/// Emit the whole scene as a standalone `<svg>` element.
#[must_use]
pub fn emit_svg(graph: &SceneGraph) -> String {
    let mut out = String::with_capacity(2048);
    emit_node(&mut out, graph, graph.root);
    log::trace!("emitted {} nodes, {} bytes", graph.graph.node_count(), out.len());
    out
}

/// Emit only the children of `idx`, for injecting into a live `<svg>`.
#[must_use]
pub fn emit_children(graph: &SceneGraph, idx: NodeIndex) -> String {
    let mut out = String::with_capacity(2048);
    for child in graph.children(idx) {
        emit_node(&mut out, graph, child);
    }
    out
}

fn emit_node(out: &mut String, graph: &SceneGraph, idx: NodeIndex) {
    let Some(node) = graph.node(idx) else {
        return;
    };
    let tag = node.kind.tag();

    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes(node) {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(&value));
    }

    let text = match &node.kind {
        NodeKind::Style { css } => Some(css.as_str()),
        NodeKind::Line(line) => Some(line.content.as_str()),
        _ => None,
    };
    let children = graph.children(idx);

    if children.is_empty() && text.is_none_or(str::is_empty) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = text {
        out.push_str(&escape_text(text));
    }
    for child in children {
        emit_node(out, graph, child);
    }
    let _ = write!(out, "</{tag}>");
}

fn attributes(node: &SceneNode) -> Attrs {
    let mut attrs = Attrs::new();
    let id = node.id.map(|id| ("id", id.to_string()));

    match &node.kind {
        NodeKind::Canvas {
            view_box,
            width,
            height,
        } => {
            attrs.push(("xmlns", SVG_NS.to_string()));
            attrs.extend(id);
            attrs.push((
                "viewBox",
                format!("0 0 {} {}", fmt_number(view_box.0), fmt_number(view_box.1)),
            ));
            if let Some(w) = width {
                attrs.push(("width", fmt_number(*w)));
            }
            if let Some(h) = height {
                attrs.push(("height", fmt_number(*h)));
            }
        }
        NodeKind::Style { .. } | NodeKind::Defs => {
            attrs.extend(id);
        }
        NodeKind::LinearGradient { vector } => {
            attrs.extend(id);
            if let Some(v) = vector {
                attrs.push(("x1", fmt_percent(v.x1)));
                attrs.push(("y1", fmt_percent(v.y1)));
                attrs.push(("x2", fmt_percent(v.x2)));
                attrs.push(("y2", fmt_percent(v.y2)));
            }
        }
        NodeKind::GradientStop { offset, color } => {
            attrs.push(("offset", fmt_percent(*offset)));
            if let Some(c) = color {
                attrs.push(("stop-color", c.to_hex()));
            }
        }
        NodeKind::Rect {
            width,
            height,
            fill,
        } => {
            attrs.push(("width", fmt_length(*width)));
            attrs.push(("height", fmt_length(*height)));
            attrs.push(("fill", fill.clone()));
        }
        NodeKind::Guide(guide) => {
            attrs.push(("x", fmt_number(guide.x)));
            attrs.push(("y", fmt_number(guide.y)));
            attrs.push(("width", fmt_number(guide.width)));
            attrs.push(("height", fmt_number(guide.height)));
            attrs.push(("fill", "none".to_string()));
            attrs.push(("stroke", guide.stroke.clone()));
            attrs.push(("stroke-dasharray", guide.dasharray.clone()));
            attrs.extend(id);
            if guide.visible {
                attrs.push(("class", "visible".to_string()));
            }
        }
        NodeKind::Text(text) => {
            attrs.push(("x", fmt_number(text.x)));
            attrs.push(("y", fmt_length(text.y)));
            attrs.push(("text-anchor", text.anchor.as_str().to_string()));
            attrs.push(("dominant-baseline", text.dominant_baseline.clone()));
            attrs.push(("font-family", text.family.name().to_string()));
            attrs.push(("font-weight", text.weight.to_string()));
            attrs.push(("font-size", format!("{}px", text.size_px)));
            if let Some(fill) = text.fill {
                attrs.push(("fill", fill.to_hex()));
            }
        }
        NodeKind::Line(line) => {
            attrs.push(("x", fmt_number(line.x)));
            attrs.push(("y", fmt_number(line.y)));
            attrs.push(("dy", format!("{}em", fmt_number(line.dy_em))));
            if let Some(anchor) = line.anchor {
                attrs.push(("text-anchor", anchor.as_str().to_string()));
            }
        }
    }
    attrs
}

// ─── Number formatting ──────────────────────────────────────────────────

/// Stringify a double the way ECMAScript `Number::toString` does.
///
/// Shortest round-trip digits; exponent notation below `1e-6` and from
/// `1e21` up; `-0` prints as `0`.
pub fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

fn fmt_percent(n: f64) -> String {
    format!("{}%", fmt_number(n))
}

fn fmt_length(len: Length) -> String {
    match len {
        Length::Units(n) => fmt_number(n),
        Length::Percent(n) => fmt_percent(n),
    }
}

// ─── Escaping ───────────────────────────────────────────────────────────

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            _ => out.push(c),
        }
    }
    out
}
