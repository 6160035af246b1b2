//! Turn classification for three ordered points.
//!
//! Sign convention
//! - `cross(a, b, c) = (b.y - a.y)(c.x - b.x) - (b.x - a.x)(c.y - b.y)`.
//! - With `YAxis::Down` (screen/SVG frames) a positive value is `Clockwise`.
//! - With `YAxis::Up` the test is flipped, so a negative value is `Clockwise`.
//!
//! The hull sweep keeps `Clockwise` turns only; switching the axis reverses the
//! traversal of the returned boundary without changing its vertex set.

use crate::point::Point;

/// Direction of the y-axis in the caller's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// y grows downward (screen coordinates).
    #[default]
    Down,
    /// y grows upward (mathematical coordinates).
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Cross term of `b - a` and `c - b` in the screen convention.
#[inline]
pub fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = b.pos() - a.pos();
    let bc = c.pos() - b.pos();
    ab.y * bc.x - ab.x * bc.y
}

/// Orientation of `a → b → c` with y growing downward.
#[inline]
pub fn orientation(a: &Point, b: &Point, c: &Point) -> Orientation {
    orientation_in(YAxis::Down, a, b, c)
}

/// Orientation of `a → b → c` in the given frame.
#[inline]
pub fn orientation_in(axis: YAxis, a: &Point, b: &Point, c: &Point) -> Orientation {
    let v = match axis {
        YAxis::Down => cross(a, b, c),
        YAxis::Up => -cross(a, b, c),
    };
    if v > 0.0 {
        Orientation::Clockwise
    } else if v < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y, 0)
    }

    #[test]
    fn cross_matches_formula() {
        // (b.y-a.y)(c.x-b.x) - (b.x-a.x)(c.y-b.y) = 4*2 - 2*(-4)
        assert_eq!(cross(&p(0.0, 0.0), &p(2.0, 4.0), &p(4.0, 0.0)), 16.0);
        assert_eq!(cross(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)), -1.0);
    }

    #[test]
    fn screen_convention() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 4.0));
        assert_eq!(orientation(&a, &b, &p(4.0, 0.0)), Orientation::Clockwise);
        assert_eq!(orientation(&a, &b, &p(0.0, 8.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(&a, &b, &p(3.0, 6.0)), Orientation::Collinear);
    }

    #[test]
    fn up_axis_flips_turns_but_not_collinearity() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 4.0));
        let right = p(4.0, 0.0);
        let on_line = p(-1.0, -2.0);
        assert_eq!(
            orientation_in(YAxis::Up, &a, &b, &right),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation_in(YAxis::Up, &a, &b, &p(0.0, 8.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation_in(YAxis::Up, &a, &b, &on_line),
            Orientation::Collinear
        );
    }

    #[test]
    fn coincident_points_are_collinear() {
        let a = p(3.0, 3.0);
        assert_eq!(orientation(&a, &a, &p(5.0, -1.0)), Orientation::Collinear);
        assert_eq!(orientation(&p(5.0, -1.0), &a, &a), Orientation::Collinear);
    }
}
