//! Exact power-of-two rescaling.
//!
//! Orientation products are computed from coordinate differences; near the
//! top of the f64 range they overflow to `inf` (difference `NaN`), near the
//! bottom they underflow to zero. Scaling every coordinate by `2^k` so the
//! largest magnitude lands in `(0.5, 1]` keeps the products in range. Multiplying
//! by a power of two only shifts the exponent, so comparisons and turn signs
//! are unchanged unless a coordinate far below the largest one underflows.

use crate::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pow2Scale {
    exp: i32,
}

impl Pow2Scale {
    /// Scale that maps `max_abs` into `(0.5, 1]`. Identity for zero.
    pub(crate) fn fitting(max_abs: f64) -> Self {
        if !(max_abs.is_finite() && max_abs > 0.0) {
            return Self { exp: 0 };
        }
        let mut exp = -(max_abs.log2().ceil() as i32);
        // log2 may round across an integer boundary
        while mul_pow2(max_abs, exp) > 1.0 {
            exp -= 1;
        }
        while mul_pow2(max_abs, exp) <= 0.5 {
            exp += 1;
        }
        Self { exp }
    }

    pub(crate) fn for_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let max_abs = pts
            .into_iter()
            .fold(0.0f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
        Self::fitting(max_abs)
    }

    /// Scaled copy of `p` relabelled with `id`.
    #[inline]
    pub(crate) fn apply(&self, p: &Point, id: u64) -> Point {
        Point::new(mul_pow2(p.x, self.exp), mul_pow2(p.y, self.exp), id)
    }
}

/// `v * 2^k`, split in two factors so each stays a normal f64.
#[inline]
fn mul_pow2(v: f64, k: i32) -> f64 {
    let half = k / 2;
    v * 2f64.powi(half) * 2f64.powi(k - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_lands_in_half_open_unit() {
        for &m in &[1.0, 0.5, 0.75, 3.0, 1e200, 1.7e308, 1e-200, 5e-324] {
            let s = Pow2Scale::fitting(m);
            let v = mul_pow2(m, s.exp);
            assert!(v > 0.5 && v <= 1.0, "{m} -> {v}");
        }
        assert_eq!(Pow2Scale::fitting(0.0), Pow2Scale { exp: 0 });
    }

    #[test]
    fn scaling_is_exact() {
        let p = Point::new(3.0e250, -1.25e-3, 7);
        let s = Pow2Scale::for_points([&p]);
        let q = s.apply(&p, 0);
        let back = Pow2Scale { exp: -s.exp }.apply(&q, 7);
        assert_eq!(back.x, p.x);
        assert_eq!(back.y, p.y);
        assert_eq!(q.id, 0);
    }
}
