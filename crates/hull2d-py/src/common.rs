use hull2d::{Hull, HullBuilder, HullCfg, HullError, PointSet, YAxis};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn build_hull(points: Vec<(f64, f64)>, y_up: bool) -> PyResult<Hull> {
    let ps = PointSet::from_coords(points);
    let cfg = HullCfg {
        y_axis: if y_up { YAxis::Up } else { YAxis::Down },
        ..HullCfg::default()
    };
    HullBuilder::new(cfg).build(&ps).map_err(map_hull_err)
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
