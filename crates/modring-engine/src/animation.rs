use serde::{Deserialize, Serialize};

/// User-configurable settings for one animation track.
///
/// `speed` is stored non-negative; a negative input is sign-flipped when
/// the settings are applied. `start` may be greater than `end` — "forward"
/// always means moving from `start` toward `end`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimSettings {
    pub enabled: bool,
    pub start: f64,
    pub end: f64,
    pub speed: f64,
    pub looping: bool,
    pub ping_pong: bool,
}

/// Live state for one animated scalar parameter.
///
/// While enabled, `value` stays within `[min(start, end), max(start, end)]`
/// except transiently at the instant a boundary is hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anim {
    pub settings: AnimSettings,
    pub value: f64,
    pub forward: bool,
}

impl Anim {
    /// A disabled track whose value starts at the given parameter baseline.
    pub fn new(settings: AnimSettings, value: f64) -> Self {
        Self { settings, value, forward: true }
    }

    /// Replace this track's settings.
    ///
    /// The disabled-to-enabled transition restarts the track at `start`.
    /// While already enabled, a live in-range value survives the edit;
    /// only a value outside the new range snaps back to `start`.
    pub fn apply_settings(&mut self, settings: AnimSettings) {
        let was_enabled = self.settings.enabled;
        self.settings = settings;
        if settings.speed < 0.0 {
            self.settings.speed = settings.speed.abs();
        }
        if !was_enabled && settings.enabled {
            self.value = settings.start;
            self.forward = true;
            return;
        }
        let (min_v, max_v) = ordered(settings.start, settings.end);
        if self.value < min_v || self.value > max_v {
            self.value = settings.start;
            self.forward = true;
        }
    }

    /// Advance the track by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let settings = self.settings;
        if !settings.enabled || settings.speed == 0.0 {
            return self.value;
        }
        if settings.start == settings.end {
            self.value = settings.start;
            return self.value;
        }

        let (min_v, max_v) = ordered(settings.start, settings.end);
        let toward_end = if settings.start <= settings.end {
            self.forward
        } else {
            !self.forward
        };
        let direction = if toward_end { 1.0 } else { -1.0 };

        self.value += direction * settings.speed * dt;

        // Landing exactly on a bound counts as a hit, so a track that
        // divides evenly into its range still stops or reverses there.
        if self.value >= max_v {
            self.handle_boundary(max_v, min_v);
        } else if self.value <= min_v {
            self.handle_boundary(min_v, max_v);
        }

        self.value
    }

    fn handle_boundary(&mut self, boundary: f64, opposite: f64) {
        if self.settings.ping_pong {
            self.value = boundary;
            self.forward = !self.forward;
            return;
        }
        if self.settings.looping {
            self.value = opposite;
            return;
        }
        self.value = boundary;
        self.settings.enabled = false;
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
