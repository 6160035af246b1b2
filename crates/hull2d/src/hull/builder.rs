use crate::error::{HullError, HullResult};
use crate::orientation::{orientation_in, Orientation, YAxis};
use crate::point::{Point, PointSet};

use super::scale::Pow2Scale;
use super::types::{Hull, HullCfg};

/// Which branch produced the boundary (for logs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HullCase {
    Single,
    Pair,
    AxisCollinear,
    MonotoneChain,
}

/// Monotone-chain hull builder.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullBuilder {
    pub cfg: HullCfg,
}

impl HullBuilder {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }

    /// Build the closed hull boundary of `ps`.
    ///
    /// Works on a private, rescaled copy; `ps` is never reordered. The
    /// boundary holds the caller's original points.
    pub fn build(&self, ps: &PointSet) -> HullResult<Hull> {
        validate(ps)?;
        // working ids are positions in `ps`
        let scale = Pow2Scale::for_points(ps);
        let mut work = PointSet::new();
        for (k, p) in ps.iter().enumerate() {
            work.append_existing(scale.apply(p, k as u64));
        }
        work.sort_ascending();

        let pts = work.points();
        let n = pts.len();
        let (case, boundary) = if n == 1 {
            (HullCase::Single, vec![pts[0]])
        } else if n == 2 {
            (HullCase::Pair, vec![pts[0], pts[1], pts[0]])
        } else if self.cfg.axis_collinear_fast_path && axis_collinear(pts) {
            (HullCase::AxisCollinear, vec![pts[0], pts[n - 1], pts[0]])
        } else {
            // upper chain ends at the last sorted point, where the lower one starts
            let mut boundary = chain(self.cfg.y_axis, pts);
            work.reverse();
            let lower = chain(self.cfg.y_axis, work.points());
            boundary.extend_from_slice(&lower[1..]);
            (HullCase::MonotoneChain, boundary)
        };
        let originals = ps.points();
        let boundary: Vec<Point> = boundary
            .iter()
            .map(|p| originals[p.id as usize])
            .collect();
        tracing::debug!(
            points = ps.len(),
            boundary = boundary.len(),
            case = ?case,
            "hull built"
        );
        Ok(Hull::new(boundary, self.cfg.y_axis))
    }
}

/// Closed hull boundary of `ps` with the default configuration.
pub fn compute_hull(ps: &PointSet) -> HullResult<Vec<Point>> {
    HullBuilder::default().build(ps).map(Hull::into_boundary)
}

fn validate(ps: &PointSet) -> HullResult<()> {
    if ps.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some((index, p)) = ps.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(HullError::InvalidInput {
            index,
            x: p.x,
            y: p.y,
        });
    }
    Ok(())
}

/// All points share the first point's `x`, or all share its `y`.
fn axis_collinear(pts: &[Point]) -> bool {
    let first = pts[0];
    pts.iter().all(|p| p.x == first.x) || pts.iter().all(|p| p.y == first.y)
}

/// One half of the sweep over `pts` (at least two points, sorted or reversed).
/// Keeps only strict clockwise turns.
fn chain(axis: YAxis, pts: &[Point]) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
    stack.extend_from_slice(&pts[..2]);
    for c in &pts[2..] {
        while stack.len() >= 2
            && orientation_in(axis, &stack[stack.len() - 2], &stack[stack.len() - 1], c)
                != Orientation::Clockwise
        {
            stack.pop();
        }
        stack.push(*c);
    }
    stack
}
