//! Points and ordered point sets.
//!
//! - `Point`: immutable `(x, y)` value with a creation-order label `id`.
//! - `PointSet`: ordered, mutable sequence with an id counter; never deduplicates.
//!
//! Equality and ordering look at coordinates only. The label is carried along
//! so callers can map hull vertices back to their own objects.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. `id` is a label, not part of equality or ordering.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub id: u64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, id: u64) -> Self {
        Self { x, y, id }
    }

    /// Coordinates as a column vector.
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lexicographic order: by `x`, then by `y`.
    ///
    /// Incomparable pairs (NaN) compare as equal; callers that need a total
    /// order must reject non-finite points first.
    #[inline]
    pub fn cmp_lex(&self, other: &Point) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            o => Some(o),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered collection of points plus the counter that labels new ones.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
    next_id: u64,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from coordinate pairs, labelling them `0, 1, 2, …` in order.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut ps = Self::new();
        for (x, y) in coords {
            ps.append(x, y);
        }
        ps
    }

    /// Append a new point with the next sequential id and return it.
    pub fn append(&mut self, x: f64, y: f64) -> Point {
        let p = Point::new(x, y, self.next_id);
        self.next_id += 1;
        self.points.push(p);
        p
    }

    /// Append a point that already carries an id. The counter is left alone.
    pub fn append_existing(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn sort_ascending(&mut self) {
        self.points.sort_by(Point::cmp_lex);
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The id the next `append` will issue.
    #[inline]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// x-coordinates in current sequence order.
    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// y-coordinates in current sequence order.
    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl FromIterator<(f64, f64)> for PointSet {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self::from_coords(iter)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, p) in self.points.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}
