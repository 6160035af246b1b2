//! Monotone-chain convex hull.
//!
//! Model
//! - Sort a private copy lexicographically, sweep left to right for one chain
//!   and right to left for the other, keeping strict clockwise turns only.
//! - Degenerate inputs (one point, two points, axis-aligned collinear sets)
//!   return `[p]` or `[first, last, first]`.
//! - Turn tests run on a copy rescaled by a power of two, so any finite input
//!   is safe from overflow in the cross products.
//!
//! Code cross-refs: `HullBuilder`, `Hull`, `orientation::orientation_in`

mod builder;
mod scale;
mod types;

pub use builder::{compute_hull, HullBuilder};
pub use types::{Hull, HullCfg};
