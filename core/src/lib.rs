//! Piecewise-constant 2D distributions for importance sampling grids of
//! weights, such as environment map luminance.

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod geometry;
pub mod grid_io;
pub mod pbrt;
pub mod sampling;
