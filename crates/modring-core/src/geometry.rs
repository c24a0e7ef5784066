use std::f64::consts::PI;

use glam::DVec2;

use crate::frame::{Circle, Frame, Label, LineSegment, Size};
use crate::params::{mod_index, Params};

/// Fraction of the smaller viewport dimension used as the circle radius,
/// leaving margin for labels.
const RADIUS_FACTOR: f64 = 0.42;
/// Labels sit slightly outside the main circle so they clear line endpoints.
const LABEL_RADIUS_FACTOR: f64 = 1.08;

/// Convert parameters into concrete geometry for one frame.
///
/// Parameters are re-normalized first, so callers that bypass the engine's
/// setters still never produce out-of-range geometry. A non-positive
/// viewport yields an empty frame rather than an error.
pub fn build_frame(params: &Params, size: Size) -> Frame {
    let p = params.normalized();
    if size.width <= 0.0 || size.height <= 0.0 {
        return Frame::empty();
    }

    let center = DVec2::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) * RADIUS_FACTOR;
    let rotation = p.rotation_deg.to_radians();

    let points = points_on_circle(p.point_count, radius, rotation, center);
    let lines = times_table_lines(
        p.point_count,
        radius,
        rotation,
        center,
        p.multiplier,
        p.start_index,
        p.resolved_line_count(),
    );

    let labels = if p.show_labels {
        labels_on_circle(p.point_count, radius * LABEL_RADIUS_FACTOR, rotation, center, p.label_step)
    } else {
        Vec::new()
    };

    Frame {
        circle: Circle { center, radius },
        lines,
        points,
        labels,
    }
}

/// `count` evenly spaced points on a circle, starting at 12 o'clock.
pub fn points_on_circle(count: i32, radius: f64, rotation: f64, center: DVec2) -> Vec<DVec2> {
    if count < 1 {
        return Vec::new();
    }
    let base_angle = -PI / 2.0 + rotation;
    let step = (2.0 * PI) / count as f64;
    (0..count)
        .map(|i| point_on_circle(radius, base_angle + step * i as f64, center))
        .collect()
}

/// Line segments for the times-table mapping `index -> index * multiplier mod count`.
///
/// The destination index is kept as a real number before angle conversion,
/// so segment endpoints sweep continuously between lattice points as the
/// multiplier animates. Rounding it would snap the curve and break the
/// classic times-table aesthetic.
pub fn times_table_lines(
    count: i32,
    radius: f64,
    rotation: f64,
    center: DVec2,
    multiplier: f64,
    start_index: i32,
    line_count: i32,
) -> Vec<LineSegment> {
    if count < 2 || line_count <= 0 {
        return Vec::new();
    }

    let base_angle = -PI / 2.0 + rotation;
    let step = (2.0 * PI) / count as f64;

    let mut lines = Vec::with_capacity(line_count as usize);
    for i in 0..line_count {
        let index = mod_index(start_index + i, count);
        let source_angle = base_angle + step * index as f64;

        let target_index = (index as f64 * multiplier).rem_euclid(count as f64);
        let target_angle = base_angle + step * target_index;

        lines.push(LineSegment {
            from: point_on_circle(radius, source_angle, center),
            to: point_on_circle(radius, target_angle, center),
        });
    }

    lines
}

/// Index labels at every `step`-th point, text in decimal.
pub fn labels_on_circle(
    count: i32,
    radius: f64,
    rotation: f64,
    center: DVec2,
    step: i32,
) -> Vec<Label> {
    if count < 1 || step < 1 {
        return Vec::new();
    }
    let base_angle = -PI / 2.0 + rotation;
    let angle_step = (2.0 * PI) / count as f64;

    let mut labels = Vec::with_capacity((count / step + 1) as usize);
    for i in (0..count).step_by(step as usize) {
        let angle = base_angle + angle_step * i as f64;
        labels.push(Label {
            position: point_on_circle(radius, angle, center),
            text: i.to_string(),
        });
    }
    labels
}

/// A point on a circle at the given angle in radians.
pub fn point_on_circle(radius: f64, angle: f64, center: DVec2) -> DVec2 {
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LINE_COUNT_ALL;

    fn almost_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_points_on_circle_count() {
        let points = points_on_circle(12, 10.0, 0.0, DVec2::ZERO);
        assert_eq!(points.len(), 12);
    }

    #[test]
    fn test_points_on_circle_degenerate() {
        assert!(points_on_circle(0, 10.0, 0.0, DVec2::ZERO).is_empty());
    }

    #[test]
    fn test_first_point_at_twelve_oclock() {
        let points = points_on_circle(4, 1.0, 0.0, DVec2::ZERO);
        assert!(almost_eq(points[0].x, 0.0));
        assert!(almost_eq(points[0].y, -1.0));
    }

    #[test]
    fn test_times_table_lines_count() {
        let lines = times_table_lines(10, 1.0, 0.0, DVec2::ZERO, 2.0, 0, 5);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_times_table_first_line_degenerate() {
        // Index 0 maps to target 0; both endpoints sit at 12 o'clock.
        let lines = times_table_lines(10, 1.0, 0.0, DVec2::ZERO, 2.0, 0, 1);
        assert_eq!(lines.len(), 1);
        let line = lines[0];
        assert!(almost_eq(line.from.x, 0.0) && almost_eq(line.from.y, -1.0));
        assert!(almost_eq(line.to.x, 0.0) && almost_eq(line.to.y, -1.0));
    }

    #[test]
    fn test_times_table_fractional_multiplier_not_rounded() {
        // Index 1 with multiplier 2.5 lands between lattice points: the
        // target angle must reflect 2.5, not round to 2 or 3.
        let lines = times_table_lines(10, 1.0, 0.0, DVec2::ZERO, 2.5, 1, 1);
        let step = 2.0 * PI / 10.0;
        let expected = point_on_circle(1.0, -PI / 2.0 + step * 2.5, DVec2::ZERO);
        assert!(almost_eq(lines[0].to.x, expected.x));
        assert!(almost_eq(lines[0].to.y, expected.y));
    }

    #[test]
    fn test_times_table_negative_multiplier_wraps() {
        let lines = times_table_lines(10, 1.0, 0.0, DVec2::ZERO, -3.0, 1, 1);
        // 1 * -3 mod 10 wraps to 7.
        let step = 2.0 * PI / 10.0;
        let expected = point_on_circle(1.0, -PI / 2.0 + step * 7.0, DVec2::ZERO);
        assert!(almost_eq(lines[0].to.x, expected.x));
        assert!(almost_eq(lines[0].to.y, expected.y));
    }

    #[test]
    fn test_times_table_degenerate() {
        assert!(times_table_lines(1, 1.0, 0.0, DVec2::ZERO, 2.0, 0, 5).is_empty());
        assert!(times_table_lines(10, 1.0, 0.0, DVec2::ZERO, 2.0, 0, 0).is_empty());
    }

    #[test]
    fn test_labels_every_step() {
        let labels = labels_on_circle(10, 1.0, 0.0, DVec2::ZERO, 2);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].text, "0");
        assert_eq!(labels[4].text, "8");
    }

    #[test]
    fn test_build_frame_empty_viewport() {
        let frame = build_frame(&Params::default(), Size::new(0.0, 200.0));
        assert_eq!(frame.circle.radius, 0.0);
        assert!(frame.is_empty());
        let frame = build_frame(&Params::default(), Size::new(200.0, -5.0));
        assert!(frame.is_empty());
    }

    #[test]
    fn test_build_frame_labels_gated_by_flag() {
        let mut params = Params {
            point_count: 10,
            label_step: 2,
            show_labels: true,
            ..Params::default()
        };
        let frame = build_frame(&params, Size::new(200.0, 200.0));
        assert_eq!(frame.labels.len(), 5);

        params.show_labels = false;
        let frame = build_frame(&params, Size::new(200.0, 200.0));
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn test_build_frame_radius_and_center() {
        let frame = build_frame(&Params::default(), Size::new(300.0, 200.0));
        assert!(almost_eq(frame.circle.radius, 200.0 * 0.42));
        assert!(almost_eq(frame.circle.center.x, 150.0));
        assert!(almost_eq(frame.circle.center.y, 100.0));
    }

    #[test]
    fn test_build_frame_all_sentinel_draws_every_line() {
        let params = Params {
            point_count: 20,
            line_count: LINE_COUNT_ALL,
            ..Params::default()
        };
        let frame = build_frame(&params, Size::new(200.0, 200.0));
        assert_eq!(frame.lines.len(), 20);
    }
}
