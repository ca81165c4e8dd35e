//! Distribution construction errors.

use crate::pbrt::Float;
use thiserror::Error;

/// Reasons a weight grid cannot be turned into a `Distribution2D`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Distribution2DError {
    /// Zero width or height, or the weight count doesn't match `width * height`.
    #[error("invalid grid dimensions {width}x{height} for {len} weights")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    /// A weight is negative, NaN or infinite.
    #[error("weight {value} at index {index} is not a finite non-negative number")]
    InvalidWeight { index: usize, value: Float },

    /// The weights sum to zero (or overflow), so there is nothing to sample.
    #[error("weights sum to {total}; expected a positive finite total")]
    DegenerateWeights { total: Float },
}
