use serde::{Deserialize, Serialize};

/// Smallest usable point count; a circle needs at least two points.
pub const POINT_COUNT_MIN: i32 = 2;
/// Hard upper cap on the point count.
pub const POINT_COUNT_MAX: i32 = 4000;
/// Sentinel line count meaning "draw every line, tracking the point count".
pub const LINE_COUNT_ALL: i32 = -1;

/// Style strings passed through to the renderer, opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub background: String,
    pub line: String,
    pub circle: String,
    pub point: String,
    pub label: String,
}

/// The user-controlled visual configuration.
///
/// All numeric fields have clamp rules applied by [`Params::normalized`];
/// the engine's setters apply the same rules on every write so geometry
/// generation never sees out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub point_count: i32,
    pub multiplier: f64,
    pub rotation_deg: f64,
    pub start_index: i32,
    /// Number of line segments to draw. [`LINE_COUNT_ALL`] draws every line.
    pub line_count: i32,

    pub show_circle: bool,
    pub show_points: bool,
    pub show_labels: bool,
    pub label_step: i32,

    pub line_width: f64,
    pub point_radius: f64,

    pub colors: Colors,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            point_count: 200,
            multiplier: 2.0,
            rotation_deg: 0.0,
            start_index: 0,
            line_count: LINE_COUNT_ALL,
            show_circle: true,
            show_points: false,
            show_labels: false,
            label_step: 10,
            line_width: 1.0,
            point_radius: 1.5,
            colors: Colors {
                background: "#0b0f1a".to_string(),
                line: "#3a6ff7".to_string(),
                circle: "#ff4d4d".to_string(),
                point: "#f2f4f8".to_string(),
                label: "#f2f4f8".to_string(),
            },
        }
    }
}

impl Params {
    /// Return a copy with every field clamped into its valid domain.
    ///
    /// `start_index` wraps into `[0, point_count)` with floor-modulo
    /// semantics, so negative inputs come back positive.
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        p.point_count = p.point_count.clamp(POINT_COUNT_MIN, POINT_COUNT_MAX);
        if p.label_step < 1 {
            p.label_step = 1;
        }
        if p.line_width <= 0.0 {
            p.line_width = 1.0;
        }
        if p.point_radius < 0.0 {
            p.point_radius = 0.0;
        }
        p.start_index = mod_index(p.start_index, p.point_count);
        p
    }

    /// The line count with the all-sentinel resolved against the point count.
    pub fn resolved_line_count(&self) -> i32 {
        if self.line_count < 0 || self.line_count > self.point_count {
            self.point_count
        } else {
            self.line_count
        }
    }
}

/// Floor-modulo for indices: the result lies in `[0, modulus)` even for
/// negative values. Returns 0 for a zero modulus.
pub fn mod_index(value: i32, modulus: i32) -> i32 {
    if modulus == 0 {
        return 0;
    }
    value.rem_euclid(modulus)
}
