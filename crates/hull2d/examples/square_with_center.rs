//! Print the hull of a small point set in both axis conventions.
//!
//! Usage:
//!   cargo run -p hull2d --example square_with_center

use hull2d::{HullBuilder, HullCfg, PointSet, YAxis};

fn main() {
    let ps = PointSet::from_coords([(0.0, 0.0), (0.0, 2.0), (2.0, 0.0), (2.0, 2.0), (1.0, 1.0)]);
    println!("input: {ps}");
    for y_axis in [YAxis::Down, YAxis::Up] {
        let cfg = HullCfg {
            y_axis,
            ..HullCfg::default()
        };
        match HullBuilder::new(cfg).build(&ps) {
            Ok(h) => println!("{y_axis:?}: {h} (area {})", h.area()),
            Err(err) => eprintln!("{y_axis:?}: {err}"),
        }
    }
}
