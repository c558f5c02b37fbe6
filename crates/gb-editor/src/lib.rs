//! Studio controller for gradient banners: builds the scene, binds control
//! inputs onto it, and exports standalone SVG.

pub mod binders;
pub mod builder;
pub mod export;
pub mod studio;

pub use binders::Readouts;
pub use builder::{SceneHandles, build_scene};
pub use export::{ExportDocument, SaveSink, export_filename};
pub use studio::{ControlInput, Studio, StudioParams};
