//! Initial scene construction.

use gb_core::model::*;
use gb_core::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use gb_core::{CanvasConfig, NodeIndex};

pub const CANVAS_ID: &str = "gradientSvg";
pub const GRADIENT_ID: &str = "grad";
pub const GUIDE_ID: &str = "safeArea";

/// Indices of the nodes the binders write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneHandles {
    pub gradient: NodeIndex,
    pub stop_start: NodeIndex,
    pub stop_end: NodeIndex,
    pub text: NodeIndex,
    pub guide: NodeIndex,
}

/// Build the banner scene: gradient defs, background, hidden guide, and an
/// empty text node centered on the canvas.
pub fn build_scene(config: &CanvasConfig, family: FontFamily) -> (SceneGraph, SceneHandles) {
    let mut graph = SceneGraph::new(SceneNode::named(
        CANVAS_ID,
        NodeKind::Canvas {
            view_box: (CANVAS_WIDTH, CANVAS_HEIGHT),
            width: None,
            height: None,
        },
    ));
    let root = graph.root;

    let defs = graph.add_node(root, SceneNode::anonymous(NodeKind::Defs));
    let gradient = graph.add_node(
        defs,
        SceneNode::named(GRADIENT_ID, NodeKind::LinearGradient { vector: None }),
    );
    let stop_start = graph.add_node(
        gradient,
        SceneNode::anonymous(NodeKind::GradientStop {
            offset: 0.0,
            color: None,
        }),
    );
    let stop_end = graph.add_node(
        gradient,
        SceneNode::anonymous(NodeKind::GradientStop {
            offset: 100.0,
            color: None,
        }),
    );

    graph.add_node(
        root,
        SceneNode::anonymous(NodeKind::Rect {
            width: Length::Percent(100.0),
            height: Length::Percent(100.0),
            fill: format!("url(#{GRADIENT_ID})"),
        }),
    );

    let zone = config.zone;
    let guide = graph.add_node(
        root,
        SceneNode::named(
            GUIDE_ID,
            NodeKind::Guide(GuideRect {
                x: zone.x,
                y: zone.y,
                width: zone.width,
                height: zone.height,
                stroke: config.guide_stroke.clone(),
                dasharray: config.guide_dasharray.clone(),
                visible: false,
            }),
        ),
    );

    let text = graph.add_node(
        root,
        SceneNode::anonymous(NodeKind::Text(TextAttrs {
            x: zone.center_x(),
            y: Length::Percent(50.0),
            anchor: TextAnchor::Middle,
            dominant_baseline: "middle".into(),
            family,
            weight: FontWeight::Medium,
            size_px: 100,
            fill: None,
        })),
    );

    log::debug!("built banner scene with {} nodes", graph.graph.node_count());

    (
        graph,
        SceneHandles {
            gradient,
            stop_start,
            stop_end,
            text,
            guide,
        },
    )
}
