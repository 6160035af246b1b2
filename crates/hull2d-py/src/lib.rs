//! PyO3 bindings for `hull2d`.
//!
//! Notes
//! - Keep bindings thin and predictable: points in and out are plain tuples.
//! - Core errors surface as `ValueError`.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn hull2d_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    Ok(())
}
