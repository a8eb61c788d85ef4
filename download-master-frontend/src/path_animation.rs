/* This file is part of the Download Master project - https://github.com/download-master/download-master
*
*  Copyright (C) 2025 Download Master contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Geometry of the download button's arrow
//!
//! The arrow is three points joined by cubic curves. Its middle point drops from the bottom of
//! the icon into a flat line with an elastic bounce, and once the download is reported as done
//! the same path is redrawn as a check mark.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;
use std::time::Duration;

pub type Point = (f64, f64);

pub const ARROW_START_Y: f64 = 20.;
pub const ARROW_END_Y: f64 = 12.;
pub const ARROW_SMOOTHING: f64 = 0.3;
pub const CHECK_MARK: [Point; 3] = [(3., 14.), (8., 19.), (21., 6.)];

/// Share of the animation spent easing the smoothing in, before the arrow starts moving
const SMOOTHING_SHARE: f64 = 0.065;
const BOUNCE_SHARE: f64 = 0.265;
const ELASTIC_AMPLITUDE: f64 = 1.12;
const ELASTIC_PERIOD: f64 = 0.4;

pub fn arrow_points(y: f64) -> [Point; 3] {
    [(4., 12.), (12., y), (20., 12.)]
}

fn control_point(current: Point, previous: Option<Point>, next: Option<Point>, reverse: bool, smoothing: f64) -> Point {
    let previous = previous.unwrap_or(current);
    let next = next.unwrap_or(current);
    let (dx, dy) = (next.0 - previous.0, next.1 - previous.1);
    let length = dx.hypot(dy) * smoothing;
    let angle = dy.atan2(dx) + if reverse { PI } else { 0. };
    (current.0 + angle.cos() * length, current.1 + angle.sin() * length)
}

/// SVG path data running through `points` with cubic curves
pub fn smooth_path(points: &[Point], smoothing: f64) -> String {
    let mut d = String::new();
    for (i, &point) in points.iter().enumerate() {
        if i == 0 {
            let _ = write!(d, "M {},{}", point.0, point.1);
            continue;
        }
        let previous = points[i - 1];
        let start = control_point(previous, i.checked_sub(2).map(|j| points[j]), Some(point), false, smoothing);
        let end = control_point(point, Some(previous), points.get(i + 1).copied(), true, smoothing);
        let _ = write!(d, " C {},{} {},{} {},{}", start.0, start.1, end.0, end.1, point.0, point.1);
    }
    d
}

pub fn arrow_path(y: f64, smoothing: f64) -> String {
    smooth_path(&arrow_points(y), smoothing)
}

pub fn check_mark_path() -> String {
    smooth_path(&CHECK_MARK, 0.)
}

/// Elastic ease-out, overshooting past 1 before settling
pub fn elastic_out(t: f64) -> f64 {
    if t <= 0. {
        return 0.;
    }
    if t >= 1. {
        return 1.;
    }
    let shift = ELASTIC_PERIOD / TAU * (1. / ELASTIC_AMPLITUDE).asin();
    ELASTIC_AMPLITUDE * 2f64.powf(-10. * t) * ((t - shift) * TAU / ELASTIC_PERIOD).sin() + 1.
}

fn quad_out(t: f64) -> f64 {
    let t = t.clamp(0., 1.);
    1. - (1. - t) * (1. - t)
}

/// Middle point height and smoothing of the arrow `elapsed` into an animation of length `total`
pub fn arrow_frame(elapsed: Duration, total: Duration) -> (f64, f64) {
    let elapsed = elapsed.as_secs_f64();
    let total = total.as_secs_f64();
    let smoothing_end = total * SMOOTHING_SHARE;
    let smoothing = ARROW_SMOOTHING * quad_out(elapsed / smoothing_end);
    let bounce = ((elapsed - smoothing_end) / (total * BOUNCE_SHARE)).clamp(0., 1.);
    let y = ARROW_START_Y + (ARROW_END_Y - ARROW_START_Y) * elastic_out(bounce);
    (y, smoothing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: Duration = Duration::from_millis(3000);

    #[test]
    fn unsmoothed_path_has_no_curvature() {
        assert_eq!(arrow_path(20., 0.), "M 4,12 C 4,12 12,20 12,20 C 12,20 20,12 20,12");
        assert_eq!(check_mark_path(), "M 3,14 C 3,14 8,19 8,19 C 8,19 21,6 21,6");
    }

    #[test]
    fn smoothed_path_keeps_its_endpoints() {
        let d = arrow_path(12., ARROW_SMOOTHING);
        assert!(d.starts_with("M 4,12 C "));
        assert!(d.ends_with(" 20,12"));
        assert_eq!(d.matches(" C ").count(), 2);
    }

    #[test]
    fn elastic_bounds() {
        assert!(elastic_out(0.).abs() < f64::EPSILON);
        assert!((elastic_out(1.) - 1.).abs() < f64::EPSILON);
        let overshoot = (1..100).map(|i| elastic_out(f64::from(i) / 100.)).fold(f64::MIN, f64::max);
        assert!(overshoot > 1.);
    }

    #[test]
    fn animation_start_and_end() {
        assert_eq!(arrow_frame(Duration::ZERO, TOTAL), (ARROW_START_Y, 0.));
        assert_eq!(arrow_frame(TOTAL, TOTAL), (ARROW_END_Y, ARROW_SMOOTHING));
        assert_eq!(arrow_frame(TOTAL / 2, TOTAL), (ARROW_END_Y, ARROW_SMOOTHING));
    }

    #[test]
    fn arrow_waits_for_smoothing() {
        let (y, smoothing) = arrow_frame(Duration::from_millis(150), TOTAL);
        assert_eq!(y, ARROW_START_Y);
        assert!(smoothing > 0. && smoothing < ARROW_SMOOTHING);
    }
}
