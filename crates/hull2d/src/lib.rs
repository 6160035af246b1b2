//! Planar convex hulls via the monotone chain.
//!
//! Layout
//! - `point`: `Point` values and the ordered `PointSet` container.
//! - `orientation`: turn classification with an explicit y-axis convention.
//! - `hull`: `HullBuilder`, `compute_hull`, and the `Hull` result value.
//! - `rand`: seeded point clouds for benches and experiments.
//!
//! The core performs no I/O. Callers (CLI, Python bindings) format the
//! returned boundary however they need.

pub mod error;
pub mod hull;
pub mod orientation;
pub mod point;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, HullResult};
pub use hull::{compute_hull, Hull, HullBuilder, HullCfg};
pub use orientation::{orientation, orientation_in, Orientation, YAxis};
pub use point::{Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, Hull, HullBuilder, HullCfg};
    pub use crate::orientation::{orientation, orientation_in, Orientation, YAxis};
    pub use crate::point::{Point, PointSet};
    pub use crate::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::{HullError, HullResult};
}
