use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D extent in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
}

/// A text label placed at a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub position: DVec2,
    pub text: String,
}

/// The bounding circle the points sit on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

/// One fully resolved image: every primitive the renderer needs to draw.
///
/// Frames are derived state. The engine recomputes one per tick and keeps
/// no reference to it; the caller owns the result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub circle: Circle,
    pub lines: Vec<LineSegment>,
    pub points: Vec<DVec2>,
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty() && self.labels.is_empty()
    }
}
