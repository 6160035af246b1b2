//! Error types for hull construction.

use thiserror::Error;

/// Precondition violations reported by [`crate::HullBuilder`].
///
/// The computation is pure, so none of these are retryable: the caller has to
/// fix the input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HullError {
    /// The point set holds no points.
    #[error("cannot build a hull from an empty point set")]
    EmptyInput,

    /// A coordinate is NaN or infinite; ordering and orientation are undefined.
    #[error("point {index} has non-finite coordinates ({x}, {y})")]
    InvalidInput { index: usize, x: f64, y: f64 },
}

pub type HullResult<T> = Result<T, HullError>;
