//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! the three coordinate systems the labeler moves between at compile time.

use std::fmt;

/// Marker type for screen coordinates (canvas pixels).
///
/// Screen coordinates are what the drawing surface reports for pointer
/// events: absolute positions on the canvas, affected by zoom and pan.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {}

/// Marker type for image coordinates (absolute pixel values).
///
/// Pixel coordinates are positions within the original image, where (0, 0)
/// is the top-left corner, independent of how the image is displayed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for normalized coordinates (0.0 to 1.0).
///
/// Normalized coordinates represent positions as fractions of the image
/// dimensions, making them resolution-independent. This is the space the
/// label file format stores.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Screen {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Screen has no variants
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Pixel has no variants
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Normalized has no variants
    }
}
