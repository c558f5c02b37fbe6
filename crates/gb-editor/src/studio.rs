//! The studio controller: single owner of the scene and its parameters.
//!
//! Every control on the page maps to one `ControlInput`. `Studio::apply`
//! records the new parameter value and runs the matching binder to
//! completion before returning; nothing is queued or deferred.

use crate::binders::{self, Readouts};
use crate::builder::{SceneHandles, build_scene};
use gb_core::gradient::GradientParams;
use gb_core::model::*;
use gb_core::{Alignment, AlignmentGroup, CanvasConfig, emit_children};
use serde::{Deserialize, Serialize};

/// One user interaction with a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlInput {
    StartColor(Color),
    EndColor(Color),
    /// Degrees.
    Angle(f64),
    Text(String),
    FontFamily(FontFamily),
    FontSize(u32),
    FontWeight(FontWeight),
    /// The checked member of the text-color choice group.
    TextColor(Color),
    Align(Alignment),
    ToggleGuide,
}

/// Current value of every control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioParams {
    pub gradient: GradientParams,
    pub text: String,
    pub family: FontFamily,
    pub size_px: u32,
    pub weight: FontWeight,
    pub text_color: Color,
    pub alignment: Option<Alignment>,
    pub guide_visible: bool,
}

pub struct Studio {
    pub(crate) config: CanvasConfig,
    pub(crate) graph: SceneGraph,
    pub(crate) handles: SceneHandles,
    pub(crate) params: StudioParams,
    alignment: AlignmentGroup,
    readouts: Readouts,
}

impl Studio {
    /// Build the scene and run the start-up binders.
    ///
    /// `family` and `text_color` are the host's initially selected font
    /// and checked text color.
    pub fn new(config: CanvasConfig, family: FontFamily, text_color: Color) -> Self {
        let (graph, handles) = build_scene(&config, family);
        let params = StudioParams {
            gradient: GradientParams::default(),
            text: String::new(),
            family,
            size_px: 100,
            weight: FontWeight::Medium,
            text_color,
            alignment: None,
            guide_visible: false,
        };

        let mut studio = Self {
            config,
            graph,
            handles,
            params,
            alignment: AlignmentGroup::new(),
            readouts: Readouts::default(),
        };
        studio.refresh_gradient();
        binders::update_text_color(&mut studio.graph, &studio.handles, text_color);
        binders::update_font_size(
            &mut studio.graph,
            &studio.handles,
            studio.params.size_px,
            &mut studio.readouts,
        );
        log::info!("studio ready ({family}, {})", text_color.to_hex());
        studio
    }

    /// Apply one control input.
    pub fn apply(&mut self, input: ControlInput) {
        log::debug!("apply {input:?}");
        match input {
            ControlInput::StartColor(color) => {
                self.params.gradient.start = color;
                self.refresh_gradient();
            }
            ControlInput::EndColor(color) => {
                self.params.gradient.end = color;
                self.refresh_gradient();
            }
            ControlInput::Angle(angle) => {
                self.params.gradient.angle = angle;
                self.refresh_gradient();
            }
            ControlInput::Text(content) => {
                binders::update_text(
                    &mut self.graph,
                    &self.handles,
                    &content,
                    self.params.size_px,
                    &self.config,
                );
                self.params.text = content;
            }
            ControlInput::FontFamily(family) => {
                self.params.family = family;
                binders::update_font_family(&mut self.graph, &self.handles, family);
            }
            ControlInput::FontSize(size_px) => {
                self.params.size_px = size_px;
                binders::update_font_size(
                    &mut self.graph,
                    &self.handles,
                    size_px,
                    &mut self.readouts,
                );
            }
            ControlInput::FontWeight(weight) => {
                self.params.weight = weight;
                binders::update_font_weight(&mut self.graph, &self.handles, weight);
            }
            ControlInput::TextColor(color) => {
                self.params.text_color = color;
                binders::update_text_color(&mut self.graph, &self.handles, color);
            }
            ControlInput::Align(alignment) => {
                self.alignment.select(alignment);
                self.params.alignment = Some(alignment);
                binders::apply_alignment(&mut self.graph, &self.handles, alignment, &self.config);
            }
            ControlInput::ToggleGuide => {
                self.params.guide_visible = binders::toggle_guide(&mut self.graph, &self.handles);
            }
        }
    }

    fn refresh_gradient(&mut self) {
        binders::update_gradient(
            &mut self.graph,
            &self.handles,
            &self.params.gradient,
            &mut self.readouts,
        );
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn handles(&self) -> &SceneHandles {
        &self.handles
    }

    pub fn params(&self) -> &StudioParams {
        &self.params
    }

    pub fn readouts(&self) -> &Readouts {
        &self.readouts
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn alignment(&self) -> &AlignmentGroup {
        &self.alignment
    }

    pub fn guide_visible(&self) -> bool {
        self.graph.is_guide_visible(self.handles.guide)
    }

    /// Inner markup of the live preview `<svg>`.
    pub fn preview_markup(&self) -> String {
        emit_children(&self.graph, self.graph.root)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(CanvasConfig::default(), FontFamily::default(), Color::WHITE)
    }
}
