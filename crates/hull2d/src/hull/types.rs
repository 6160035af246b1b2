//! Hull configuration and the result value.
//!
//! - `HullCfg`: axis convention and the axis-collinear fast path.
//! - `Hull`: closed boundary plus the convention it was built with.

use std::fmt;

use crate::orientation::{cross, orientation_in, Orientation, YAxis};
use crate::point::Point;

use super::scale::Pow2Scale;

/// Builder configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    pub y_axis: YAxis,
    /// Short-circuit sets whose points all share an `x` or all share a `y`.
    /// The general sweep handles these too; this only skips the scan.
    pub axis_collinear_fast_path: bool,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            y_axis: YAxis::Down,
            axis_collinear_fast_path: true,
        }
    }
}

/// Closed hull boundary: first point repeated at the end (except for a single
/// input point, where the boundary is that point alone).
#[derive(Clone, Debug)]
pub struct Hull {
    boundary: Vec<Point>,
    y_axis: YAxis,
}

impl Hull {
    pub(crate) fn new(boundary: Vec<Point>, y_axis: YAxis) -> Self {
        Self { boundary, y_axis }
    }

    #[inline]
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    pub fn into_boundary(self) -> Vec<Point> {
        self.boundary
    }

    #[inline]
    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Distinct hull vertices in traversal order (closing repeat dropped).
    pub fn vertices(&self) -> &[Point] {
        let n = self.boundary.len();
        if n >= 2 && self.is_closed() {
            &self.boundary[..n - 1]
        } else {
            &self.boundary
        }
    }

    /// First and last boundary points have equal coordinates.
    pub fn is_closed(&self) -> bool {
        match (self.boundary.first(), self.boundary.last()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Zero-area hull: a point or a segment.
    pub fn is_degenerate(&self) -> bool {
        self.vertices().len() < 3
    }

    /// Shoelace area with the usual `x_i y_{i+1} - x_{i+1} y_i` terms.
    /// The sign depends on the traversal direction.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .boundary
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum();
        0.5 * twice
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True if `(x, y)` lies on the boundary or strictly inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        let q = Point::new(x, y, u64::MAX);
        let scale = Pow2Scale::for_points(self.vertices().iter().chain([&q]));
        let q = scale.apply(&q, q.id);
        let vs: Vec<Point> = self.vertices().iter().map(|p| scale.apply(p, p.id)).collect();
        match vs.as_slice() {
            [] => false,
            [a] => *a == q,
            [a, b] => on_segment(a, b, &q),
            vs => {
                let n = vs.len();
                (0..n).all(|k| {
                    orientation_in(self.y_axis, &vs[k], &vs[(k + 1) % n], &q)
                        != Orientation::CounterClockwise
                })
            }
        }
    }
}

fn on_segment(a: &Point, b: &Point, q: &Point) -> bool {
    cross(a, b, q) == 0.0
        && q.x >= a.x.min(b.x)
        && q.x <= a.x.max(b.x)
        && q.y >= a.y.min(b.y)
        && q.y <= a.y.max(b.y)
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, p) in self.boundary.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
