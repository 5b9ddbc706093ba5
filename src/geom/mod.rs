//! Typed coordinate spaces and projection math.
//!
//! The labeler works in three coordinate systems: the canvas the user
//! points at ([`Screen`]), the original image's pixels ([`Pixel`]), and the
//! resolution-independent fractions stored in label files ([`Normalized`]).
//! Marker types keep the three apart at compile time; [`transform`] holds
//! the pure conversion arithmetic.

mod coord;
mod space;
pub mod transform;

// Re-export core types for convenient access
pub use coord::Coord;
pub use space::{Normalized, Pixel, Screen};
pub use transform::{exceeds_min_size, rect_from_corners, Projection};
