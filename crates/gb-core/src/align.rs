//! Horizontal alignment against the reference zone.

use crate::config::CanvasConfig;
use crate::model::TextAnchor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn name(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn anchor(&self) -> TextAnchor {
        match self {
            Alignment::Left => TextAnchor::Start,
            Alignment::Center => TextAnchor::Middle,
            Alignment::Right => TextAnchor::End,
        }
    }

    /// Horizontal anchor position: inset from the zone's left/right edge, or
    /// its center.
    pub fn x(&self, config: &CanvasConfig) -> f64 {
        match self {
            Alignment::Left => config.zone.left() + config.align_inset,
            Alignment::Center => config.zone.center_x(),
            Alignment::Right => config.zone.right() - config.align_inset,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(format!("unknown alignment: {other:?}")),
        }
    }
}

/// Toggle group with at most one active alignment button.
///
/// Starts with nothing active; once a button is picked exactly one stays
/// active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentGroup {
    active: Option<Alignment>,
}

impl AlignmentGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `alignment`, returning the previously active one.
    pub fn select(&mut self, alignment: Alignment) -> Option<Alignment> {
        self.active.replace(alignment)
    }

    pub fn active(&self) -> Option<Alignment> {
        self.active
    }

    pub fn is_active(&self, alignment: Alignment) -> bool {
        self.active == Some(alignment)
    }
}
