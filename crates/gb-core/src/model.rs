//! Typed scene-graph model for banner documents.
//!
//! The scene is an ordered tree rooted at the `<svg>` canvas. Every node kind
//! carries exactly the attributes the emitter writes for it, so binders mutate
//! typed fields instead of stringly attribute maps. Child order is explicit
//! and survives node removal (the graph's free list reuses indices).

use crate::gradient::GradientVector;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ─── Colors ──────────────────────────────────────────────────────────────

/// 24-bit RGB color, as produced by an `<input type="color">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Six lowercase hex digits without `#` (`aabbcc`).
    pub fn hex_digits(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`, the form written into markup.
    pub fn to_hex(&self) -> String {
        format!("#{}", self.hex_digits())
    }

    /// Uppercase `#RRGGBB`, the form shown in readouts.
    pub fn to_hex_upper(&self) -> String {
        self.to_hex().to_ascii_uppercase()
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s.trim()).ok_or_else(|| format!("invalid hex color: {s:?}"))
    }
}

// ─── Font / Text ─────────────────────────────────────────────────────────

/// Font families offered by the font picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Montserrat,
    Inter,
    PlayfairDisplay,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [
        FontFamily::Montserrat,
        FontFamily::Inter,
        FontFamily::PlayfairDisplay,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Inter => "Inter",
            FontFamily::PlayfairDisplay => "Playfair Display",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FontFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown font family: {s:?}"))
    }
}

/// Font weights offered by the weight picker (CSS numeric scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    Regular,
    #[default]
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Some(match value {
            300 => FontWeight::Light,
            400 => FontWeight::Regular,
            500 => FontWeight::Medium,
            600 => FontWeight::SemiBold,
            700 => FontWeight::Bold,
            800 => FontWeight::ExtraBold,
            900 => FontWeight::Black,
            _ => return None,
        })
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(FontWeight::from_value)
            .ok_or_else(|| format!("unsupported font weight: {s:?}"))
    }
}

/// SVG `text-anchor` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// An SVG length: bare user units or a percentage of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Units(f64),
    Percent(f64),
}

// ─── Scene Graph Nodes ───────────────────────────────────────────────────

/// Attributes of the single `<text>` node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttrs {
    pub x: f64,
    pub y: Length,
    pub anchor: TextAnchor,
    pub dominant_baseline: String,
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_px: u32,
    /// Unset until the text-color binder first runs.
    pub fill: Option<Color>,
}

/// One `<tspan>` line of the text block.
///
/// No family or weight: fragments inherit them from
/// the parent `<text>`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFragment {
    pub content: String,
    pub x: f64,
    pub y: f64,
    /// Downward offset in `em`, relative to the fragment's own `y`.
    pub dy_em: f64,
    /// Only stamped on export copies.
    pub anchor: Option<TextAnchor>,
}

/// The dashed reference-zone rectangle shown while composing.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke: String,
    pub dasharray: String,
    pub visible: bool,
}

/// The node kinds in the banner scene.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root `<svg>`. Width/height are only pinned on export copies.
    Canvas {
        view_box: (f64, f64),
        width: Option<f64>,
        height: Option<f64>,
    },

    /// Embedded `<style>` block.
    Style { css: String },

    /// `<defs>` container.
    Defs,

    /// `<linearGradient>`; the vector is unset until the gradient binder runs.
    LinearGradient { vector: Option<GradientVector> },

    /// `<stop>` at a percentage offset.
    GradientStop { offset: f64, color: Option<Color> },

    /// Filled `<rect>` (the background).
    Rect {
        width: Length,
        height: Length,
        fill: String,
    },

    /// Guide overlay `<rect>`.
    Guide(GuideRect),

    Text(TextAttrs),

    Line(LineFragment),
}

impl NodeKind {
    /// SVG element name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Canvas { .. } => "svg",
            NodeKind::Style { .. } => "style",
            NodeKind::Defs => "defs",
            NodeKind::LinearGradient { .. } => "linearGradient",
            NodeKind::GradientStop { .. } => "stop",
            NodeKind::Rect { .. } | NodeKind::Guide(_) => "rect",
            NodeKind::Text(_) => "text",
            NodeKind::Line(_) => "tspan",
        }
    }
}

/// A single node in the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Written as `id="…"` when set. Only nodes referenced from markup
    /// (`gradientSvg`, `grad`, `safeArea`) carry one.
    pub id: Option<&'static str>,

    pub kind: NodeKind,
}

impl SceneNode {
    /// A node referenced from markup by its ID.
    pub fn named(id: &'static str, kind: NodeKind) -> Self {
        Self { id: Some(id), kind }
    }

    pub fn anonymous(kind: NodeKind) -> Self {
        Self { id: None, kind }
    }
}

// ─── Scene Graph ─────────────────────────────────────────────────────────

/// The complete banner document.
///
/// Edges go from parent → child. `child_order` is authoritative for
/// sibling order.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    /// The underlying directed graph.
    pub graph: StableDiGraph<SceneNode, ()>,

    /// The root canvas index.
    pub root: NodeIndex,

    /// Named nodes by ID.
    pub id_index: HashMap<&'static str, NodeIndex>,

    child_order: HashMap<NodeIndex, Vec<NodeIndex>>,
}

impl SceneGraph {
    /// Create a scene graph holding only `root`.
    #[must_use]
    pub fn new(root: SceneNode) -> Self {
        let mut graph = StableDiGraph::new();
        let id = root.id;
        let root = graph.add_node(root);

        let mut id_index = HashMap::new();
        if let Some(id) = id {
            id_index.insert(id, root);
        }

        Self {
            graph,
            root,
            id_index,
            child_order: HashMap::new(),
        }
    }

    /// Append a node as the last child of `parent`. Returns the new index.
    pub fn add_node(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let idx = self.attach(parent, node);
        self.child_order.entry(parent).or_default().push(idx);
        idx
    }

    /// Insert a node as the first child of `parent`.
    pub fn insert_first(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let idx = self.attach(parent, node);
        self.child_order.entry(parent).or_default().insert(0, idx);
        idx
    }

    fn attach(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let id = node.id;
        let idx = self.graph.add_node(node);
        self.graph.add_edge(parent, idx, ());
        if let Some(id) = id {
            self.id_index.insert(id, idx);
        }
        idx
    }

    /// Remove a node and its whole subtree.
    pub fn remove_node(&mut self, idx: NodeIndex) -> Option<SceneNode> {
        for child in self.children(idx) {
            self.remove_node(child);
        }
        self.child_order.remove(&idx);
        if let Some(parent) = self.parent(idx)
            && let Some(order) = self.child_order.get_mut(&parent)
        {
            order.retain(|&c| c != idx);
        }
        let removed = self.graph.remove_node(idx);
        if let Some(id) = removed.as_ref().and_then(|n| n.id) {
            self.id_index.remove(id);
        }
        removed
    }

    /// Remove every child of `parent`, keeping `parent` itself.
    pub fn clear_children(&mut self, parent: NodeIndex) {
        for child in self.children(parent) {
            self.remove_node(child);
        }
    }

    /// Look up a node by its ID.
    pub fn get_by_id(&self, id: &str) -> Option<&SceneNode> {
        self.id_index.get(id).map(|idx| &self.graph[*idx])
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&SceneNode> {
        self.graph.node_weight(idx)
    }

    pub fn kind_mut(&mut self, idx: NodeIndex) -> Option<&mut NodeKind> {
        self.graph.node_weight_mut(idx).map(|n| &mut n.kind)
    }

    /// Get the parent index of a node.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    /// Children of a node in document order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.child_order.get(&idx).cloned().unwrap_or_default()
    }

    /// All nodes in document (pre-)order, starting at the root.
    pub fn descendants(&self) -> Vec<NodeIndex> {
        let mut out = Vec::with_capacity(self.graph.node_count());
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(self.children(idx).into_iter().rev());
        }
        out
    }

    /// First node in document order matching `pred`.
    pub fn find(&self, pred: impl Fn(&NodeKind) -> bool) -> Option<NodeIndex> {
        self.descendants()
            .into_iter()
            .find(|&idx| pred(&self.graph[idx].kind))
    }

    // ─── Typed accessors ─────────────────────────────────────────────────

    pub fn text(&self, idx: NodeIndex) -> Option<&TextAttrs> {
        match self.node(idx).map(|n| &n.kind) {
            Some(NodeKind::Text(attrs)) => Some(attrs),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, idx: NodeIndex) -> Option<&mut TextAttrs> {
        match self.kind_mut(idx) {
            Some(NodeKind::Text(attrs)) => Some(attrs),
            _ => None,
        }
    }

    pub fn guide_mut(&mut self, idx: NodeIndex) -> Option<&mut GuideRect> {
        match self.kind_mut(idx) {
            Some(NodeKind::Guide(guide)) => Some(guide),
            _ => None,
        }
    }

    pub fn is_guide_visible(&self, idx: NodeIndex) -> bool {
        matches!(
            self.node(idx).map(|n| &n.kind),
            Some(NodeKind::Guide(GuideRect { visible: true, .. }))
        )
    }

    /// The `<tspan>` fragments under a text node, top to bottom.
    pub fn lines(&self, text: NodeIndex) -> Vec<&LineFragment> {
        self.children(text)
            .into_iter()
            .filter_map(|idx| match &self.graph[idx].kind {
                NodeKind::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    /// Apply `f` to every `<tspan>` fragment under a text node.
    pub fn for_each_line_mut(&mut self, text: NodeIndex, mut f: impl FnMut(&mut LineFragment)) {
        for idx in self.children(text) {
            if let Some(NodeKind::Line(line)) = self.kind_mut(idx) {
                f(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> SceneNode {
        SceneNode::named(
            "svg_under_test",
            NodeKind::Canvas {
                view_box: (1500.0, 600.0),
                width: None,
                height: None,
            },
        )
    }

    fn line(content: &str) -> SceneNode {
        SceneNode::anonymous(NodeKind::Line(LineFragment {
            content: content.into(),
            x: 750.0,
            y: 300.0,
            dy_em: 0.0,
            anchor: None,
        }))
    }

    fn contents(sg: &SceneGraph, parent: NodeIndex) -> Vec<String> {
        sg.lines(parent).iter().map(|l| l.content.clone()).collect()
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Color::from_hex("#AABBCC"), Some(Color::rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(Color::from_hex("112233"), Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert!("not a color".parse::<Color>().is_err());
    }

    #[test]
    fn hex_case_per_context() {
        let c = Color::rgb(0xAA, 0xBB, 0xCC);
        assert_eq!(c.to_hex(), "#aabbcc");
        assert_eq!(c.to_hex_upper(), "#AABBCC");
        assert_eq!(c.hex_digits(), "aabbcc");
    }

    #[test]
    fn font_choices_parse_from_control_values() {
        assert_eq!(
            "Playfair Display".parse::<FontFamily>(),
            Ok(FontFamily::PlayfairDisplay)
        );
        assert_eq!("inter".parse::<FontFamily>(), Ok(FontFamily::Inter));
        assert!("Comic Sans".parse::<FontFamily>().is_err());

        assert_eq!("700".parse::<FontWeight>(), Ok(FontWeight::Bold));
        assert_eq!(FontWeight::default().to_string(), "500");
        assert!("450".parse::<FontWeight>().is_err());
    }

    #[test]
    fn children_keep_insertion_order_after_removal() {
        let mut sg = SceneGraph::new(canvas());
        let text = sg.root;

        for name in ["a", "b", "c"] {
            sg.add_node(text, line(name));
        }
        sg.clear_children(text);
        assert!(sg.children(text).is_empty());

        // Freed indices are reused in LIFO order; document order must not follow them.
        for name in ["one", "two", "three", "four"] {
            sg.add_node(text, line(name));
        }
        assert_eq!(contents(&sg, text), ["one", "two", "three", "four"]);
    }

    #[test]
    fn insert_first_prepends() {
        let mut sg = SceneGraph::new(canvas());
        let root = sg.root;
        sg.add_node(root, SceneNode::anonymous(NodeKind::Defs));
        let style = sg.insert_first(
            root,
            SceneNode::anonymous(NodeKind::Style { css: "x".into() }),
        );
        assert_eq!(sg.children(root).first(), Some(&style));
    }

    #[test]
    fn remove_node_drops_subtree_and_index() {
        let mut sg = SceneGraph::new(canvas());
        let root = sg.root;
        let defs = sg.add_node(root, SceneNode::named("defs_under_test", NodeKind::Defs));
        let stop = sg.add_node(
            defs,
            SceneNode::named(
                "stop_under_test",
                NodeKind::GradientStop {
                    offset: 0.0,
                    color: None,
                },
            ),
        );

        sg.remove_node(defs);
        assert!(sg.node(stop).is_none());
        assert!(sg.get_by_id("stop_under_test").is_none());
        assert!(sg.children(root).is_empty());
    }

    #[test]
    fn anonymous_nodes_stay_out_of_id_index() {
        let mut sg = SceneGraph::new(canvas());
        let text = sg.root;
        for _ in 0..3 {
            sg.clear_children(text);
            sg.add_node(text, line("a"));
            sg.add_node(text, line("b"));
        }
        assert_eq!(sg.id_index.len(), 1);
        assert_eq!(sg.index_of("svg_under_test"), Some(text));
        assert_eq!(sg.graph.node_count(), 3);
    }

    #[test]
    fn descendants_are_preorder() {
        let mut sg = SceneGraph::new(canvas());
        let root = sg.root;
        let defs = sg.add_node(root, SceneNode::anonymous(NodeKind::Defs));
        let stop = sg.add_node(
            defs,
            SceneNode::anonymous(NodeKind::GradientStop {
                offset: 0.0,
                color: None,
            }),
        );
        let rect = sg.add_node(
            root,
            SceneNode::anonymous(NodeKind::Rect {
                width: Length::Percent(100.0),
                height: Length::Percent(100.0),
                fill: "none".into(),
            }),
        );
        assert_eq!(sg.descendants(), vec![root, defs, stop, rect]);
    }
}
