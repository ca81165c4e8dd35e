//! Geometry

mod point2;

// Re-export
pub use point2::*;
