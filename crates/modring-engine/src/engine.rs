use serde::{Deserialize, Serialize};

use modring_core::params::{LINE_COUNT_ALL, POINT_COUNT_MAX, POINT_COUNT_MIN};
use modring_core::{build_frame, Frame, Params, Size};

use crate::animation::{Anim, AnimSettings};

/// Which parameter a manual step action advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StepTarget {
    #[default]
    Lines,
    Multiplier,
    Points,
}

/// Manual stepping configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    pub target: StepTarget,
    pub amount: f64,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self { target: StepTarget::Lines, amount: 1.0 }
    }
}

/// The three animatable parameter tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracks {
    pub lines: Anim,
    pub multiplier: Anim,
    pub points: Anim,
}

/// A point-in-time copy of the engine state, for UI synchronization.
///
/// This is a defensive copy: mutating it has no effect on the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub params: Params,
    pub tracks: Tracks,
    pub running: bool,
    pub step: StepConfig,
}

/// Owns the live parameter set, animation tracks, and playback flags.
///
/// Single-threaded by design: setters and [`Engine::update`] must be called
/// from one logical thread of control. There is no internal locking.
#[derive(Debug, Clone)]
pub struct Engine {
    params: Params,
    tracks: Tracks,
    running: bool,
    reverse: bool,
    step: StepConfig,
}

impl Engine {
    /// Create an engine from a baseline parameter set.
    ///
    /// The baseline is normalized, all tracks are constructed disabled with
    /// track-specific default ranges, and playback starts running.
    pub fn new(params: Params) -> Self {
        let params = params.normalized();
        let point_count = params.point_count as f64;
        let tracks = Tracks {
            lines: Anim::new(
                AnimSettings { start: 0.0, end: point_count, speed: 60.0, ..AnimSettings::default() },
                point_count,
            ),
            multiplier: Anim::new(
                AnimSettings {
                    start: params.multiplier,
                    end: params.multiplier + 5.0,
                    speed: 0.2,
                    ..AnimSettings::default()
                },
                params.multiplier,
            ),
            points: Anim::new(
                AnimSettings { start: point_count, end: point_count, speed: 1.0, ..AnimSettings::default() },
                point_count,
            ),
        };
        Self {
            params,
            tracks,
            running: true,
            reverse: false,
            step: StepConfig::default(),
        }
    }

    /// Replace the whole engine with a fresh one built from `params`.
    ///
    /// No animation or track state survives a reset.
    pub fn reset(&mut self, params: Params) {
        log::debug!("engine reset to new baseline");
        *self = Engine::new(params);
    }

    /// A defensive copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            params: self.params.clone(),
            tracks: self.tracks.clone(),
            running: self.running,
            step: self.step,
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Reverse perceived playback for all tracks without touching their
    /// individual direction flags.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    pub fn set_step_target(&mut self, target: StepTarget) {
        self.step.target = target;
    }

    /// A zero amount would make stepping a permanent no-op, so it becomes 1.
    pub fn set_step_amount(&mut self, amount: f64) {
        self.step.amount = if amount == 0.0 { 1.0 } else { amount };
    }

    /// Advance or rewind the configured step target. `direction` is +1 or
    /// -1; zero is a no-op.
    pub fn step(&mut self, direction: i32) {
        if direction == 0 {
            return;
        }
        let amount = if self.step.amount == 0.0 { 1.0 } else { self.step.amount };

        match self.step.target {
            StepTarget::Multiplier => {
                self.set_multiplier(self.params.multiplier + direction as f64 * amount);
            }
            StepTarget::Points => {
                let step = rounded_step(amount);
                self.set_point_count(self.params.point_count + direction * step);
            }
            StepTarget::Lines => {
                let step = rounded_step(amount);
                if self.params.line_count < 0 {
                    self.params.line_count = self.params.point_count;
                }
                self.set_line_count(self.params.line_count + direction * step);
            }
        }
    }

    /// Advance enabled animation tracks by `dt` seconds.
    ///
    /// Returns immediately while paused, so time never accumulates silently.
    /// A `dt` of exactly zero is a defined no-op (duplicate-timestamp guard).
    pub fn update(&mut self, dt: f64) {
        if !self.running || dt == 0.0 {
            return;
        }
        let dt = if self.reverse { -dt } else { dt };

        if self.tracks.lines.settings.enabled {
            let value = self.tracks.lines.advance(dt);
            self.set_line_count(value.round() as i32);
        }
        if self.tracks.multiplier.settings.enabled {
            let value = self.tracks.multiplier.advance(dt);
            self.set_multiplier(value);
        }
        if self.tracks.points.settings.enabled {
            let value = self.tracks.points.advance(dt);
            self.set_point_count(value.round() as i32);
        }
    }

    /// Geometry for the current parameters at the given viewport size.
    pub fn frame(&self, size: Size) -> Frame {
        build_frame(&self.params, size)
    }

    /// Clamp to `[2, 4000]`; an explicit line count above the new point
    /// count is pulled down to match.
    pub fn set_point_count(&mut self, count: i32) {
        let count = count.clamp(POINT_COUNT_MIN, POINT_COUNT_MAX);
        self.params.point_count = count;
        if self.params.line_count > count {
            self.params.line_count = count;
        }
    }

    pub fn set_multiplier(&mut self, multiplier: f64) {
        self.params.multiplier = multiplier;
    }

    pub fn set_rotation_deg(&mut self, deg: f64) {
        self.params.rotation_deg = deg;
    }

    pub fn set_start_index(&mut self, index: i32) {
        self.params.start_index = index;
    }

    pub fn set_line_count(&mut self, count: i32) {
        self.params.line_count = count.clamp(0, self.params.point_count);
    }

    /// Toggle draw-all mode. Turning it off resolves the sentinel to the
    /// concrete current point count.
    pub fn set_line_all(&mut self, all: bool) {
        if all {
            self.params.line_count = LINE_COUNT_ALL;
            return;
        }
        if self.params.line_count < 0 {
            self.params.line_count = self.params.point_count;
        }
    }

    pub fn set_show_circle(&mut self, show: bool) {
        self.params.show_circle = show;
    }

    pub fn set_show_points(&mut self, show: bool) {
        self.params.show_points = show;
    }

    pub fn set_show_labels(&mut self, show: bool) {
        self.params.show_labels = show;
    }

    pub fn set_label_step(&mut self, step: i32) {
        self.params.label_step = step.max(1);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.params.line_width = if width <= 0.0 { 1.0 } else { width };
    }

    pub fn set_point_radius(&mut self, radius: f64) {
        self.params.point_radius = radius.max(0.0);
    }

    // Colors are opaque to the engine; validation is a rendering concern.

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.params.colors.background = color.into();
    }

    pub fn set_line_color(&mut self, color: impl Into<String>) {
        self.params.colors.line = color.into();
    }

    pub fn set_circle_color(&mut self, color: impl Into<String>) {
        self.params.colors.circle = color.into();
    }

    pub fn set_point_color(&mut self, color: impl Into<String>) {
        self.params.colors.point = color.into();
    }

    pub fn set_label_color(&mut self, color: impl Into<String>) {
        self.params.colors.label = color.into();
    }

    pub fn set_line_anim(&mut self, settings: AnimSettings) {
        self.tracks.lines.apply_settings(settings);
    }

    pub fn set_multiplier_anim(&mut self, settings: AnimSettings) {
        self.tracks.multiplier.apply_settings(settings);
    }

    pub fn set_point_anim(&mut self, settings: AnimSettings) {
        self.tracks.points.apply_settings(settings);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

/// Round a step amount to the nearest integer, with minimum magnitude 1.
fn rounded_step(amount: f64) -> i32 {
    let step = amount.round() as i32;
    if step == 0 {
        1
    } else {
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_normalizes_baseline() {
        let engine = Engine::new(Params { point_count: 1, ..Params::default() });
        assert_eq!(engine.snapshot().params.point_count, 2);
    }

    #[test]
    fn test_default_tracks_disabled() {
        let snapshot = Engine::default().snapshot();
        assert!(!snapshot.tracks.lines.settings.enabled);
        assert!(!snapshot.tracks.multiplier.settings.enabled);
        assert!(!snapshot.tracks.points.settings.enabled);
        assert!(snapshot.running);
    }

    #[test]
    fn test_rounded_step_minimum_magnitude() {
        assert_eq!(rounded_step(0.2), 1);
        assert_eq!(rounded_step(3.4), 3);
        assert_eq!(rounded_step(-2.6), -3);
    }

    #[test]
    fn test_snapshot_is_defensive_copy() {
        let engine = Engine::default();
        let mut snapshot = engine.snapshot();
        snapshot.params.point_count = 7;
        snapshot.running = false;
        assert_eq!(engine.snapshot().params.point_count, 200);
        assert!(engine.snapshot().running);
    }
}
