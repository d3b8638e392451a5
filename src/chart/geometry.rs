//! Pie layout and annular arc paths.
//!
//! Angles are in radians, start at 12 o'clock and grow clockwise. Points are
//! relative to the chart center with y pointing down, so an angle `a` on a
//! circle of radius `r` sits at `(r * sin a, -r * cos a)`.
#![allow(clippy::float_arithmetic)]

use std::f64::consts::{
    PI,
    TAU,
};
use std::fmt::Write;

use super::data::ChartDatum;

/// Angles below this are treated as zero and above `TAU - EPSILON` as a full turn.
const EPSILON: f64 = 1e-12;

/// Angular extent of one datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice<'a> {
    pub datum: &'a ChartDatum,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Lays data out around the full circle in input order, each slice
/// proportional to its value.
///
/// Returns no slices when the values sum to zero.
#[must_use]
pub fn pie(data: &[ChartDatum]) -> Vec<PieSlice<'_>> {
    let total: f64 = data.iter().map(|datum| f64::from(datum.value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start_angle = 0.0;
    data.iter()
        .map(|datum| {
            let end_angle = start_angle + f64::from(datum.value) / total * TAU;
            let slice = PieSlice { datum, start_angle, end_angle };
            start_angle = end_angle;
            slice
        })
        .collect()
}

/// An annular sector generator with fixed radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Arc {
    #[must_use]
    pub const fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self { inner_radius, outer_radius }
    }

    /// SVG path data of the sector between two angles.
    #[must_use]
    pub fn path(&self, start_angle: f64, end_angle: f64) -> String {
        let (r0, r1) = (self.inner_radius, self.outer_radius);
        let sweep = end_angle - start_angle;
        let mut d = String::new();

        if r1 <= EPSILON || sweep.abs() <= EPSILON {
            return "M0,0Z".to_string();
        }

        if sweep >= TAU - EPSILON {
            // full ring: two half circles per radius
            let _ = write!(d, "M0,{}", num(-r1));
            let _ = write!(d, "A{0},{0},0,1,1,0,{1}", num(r1), num(r1));
            let _ = write!(d, "A{0},{0},0,1,1,0,{1}", num(r1), num(-r1));
            if r0 > EPSILON {
                let _ = write!(d, "M0,{}", num(-r0));
                let _ = write!(d, "A{0},{0},0,1,0,0,{1}", num(r0), num(r0));
                let _ = write!(d, "A{0},{0},0,1,0,0,{1}", num(r0), num(-r0));
            }
            d.push('Z');
            return d;
        }

        let large_arc = u8::from(sweep > PI);
        let (ox0, oy0) = point(r1, start_angle);
        let (ox1, oy1) = point(r1, end_angle);
        let _ = write!(d, "M{},{}", num(ox0), num(oy0));
        let _ = write!(d, "A{0},{0},0,{1},1,{2},{3}", num(r1), large_arc, num(ox1), num(oy1));

        if r0 > EPSILON {
            let (ix1, iy1) = point(r0, end_angle);
            let (ix0, iy0) = point(r0, start_angle);
            let _ = write!(d, "L{},{}", num(ix1), num(iy1));
            let _ = write!(d, "A{0},{0},0,{1},0,{2},{3}", num(r0), large_arc, num(ix0), num(iy0));
        } else {
            d.push_str("L0,0");
        }

        d.push('Z');
        d
    }

    /// Midpoint of the sector: halfway between the radii, halfway between
    /// the angles.
    #[must_use]
    pub fn centroid(&self, start_angle: f64, end_angle: f64) -> (f64, f64) {
        point((self.inner_radius + self.outer_radius) / 2.0, (start_angle + end_angle) / 2.0)
    }
}

fn point(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub(crate) fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Formats a coordinate with at most three decimals.
#[must_use]
pub(crate) fn num(value: f64) -> String {
    // adding 0.0 turns -0 into 0
    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    format!("{rounded}")
}
