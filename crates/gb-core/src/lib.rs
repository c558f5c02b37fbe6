pub mod align;
pub mod config;
pub mod emitter;
pub mod gradient;
pub mod layout;
pub mod model;

pub use align::{Alignment, AlignmentGroup};
pub use config::{CanvasConfig, ReferenceZone};
pub use emitter::{emit_children, emit_svg};
pub use gradient::{GradientParams, GradientVector, gradient_vector};
pub use layout::layout_lines;
pub use model::*;

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;
