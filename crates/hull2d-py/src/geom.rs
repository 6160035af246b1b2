//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::build_hull;
use pyo3::prelude::*;

/// Closed hull boundary as `(id, x, y)` tuples; ids are input positions.
#[pyfunction]
#[pyo3(signature = (points, y_up = false))]
pub fn convex_hull(points: Vec<(f64, f64)>, y_up: bool) -> PyResult<Vec<(u64, f64, f64)>> {
    let hull = build_hull(points, y_up)?;
    Ok(hull.boundary().iter().map(|p| (p.id, p.x, p.y)).collect())
}

/// Area enclosed by the hull (zero for points and segments).
#[pyfunction]
pub fn hull_area(points: Vec<(f64, f64)>) -> PyResult<f64> {
    Ok(build_hull(points, false)?.area())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(hull_area, m)?)?;
    Ok(())
}
