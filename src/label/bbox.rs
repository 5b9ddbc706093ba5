//! Normalized bounding boxes as stored in label files.

use thiserror::Error;

use crate::geom::{rect_from_corners, Coord, Normalized};

/// Tolerance for the unit-square bounds check.
///
/// Center/size arithmetic on two in-range corners can land a hair outside
/// [0,1] through rounding; values within this margin are accepted.
const BOUNDS_EPS: f64 = 1e-9;

/// One annotated region, in image-relative coordinates.
///
/// A box is a class id plus a center point and extent, all expressed as
/// fractions of the image dimensions. Values are validated on construction:
/// any `BoundingBox` that exists is finite, has strictly positive width and
/// height, and lies entirely inside the unit square. Fields are private so
/// that guarantee cannot be broken after the fact; corrections are modeled
/// as remove-and-re-add, never in-place mutation.
#[derive(Clone, Copy, PartialEq)]
pub struct BoundingBox {
    class_id: u32,
    x_center: f64,
    y_center: f64,
    width: f64,
    height: f64,
}

/// Why a candidate box was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidBox {
    #[error("coordinate is not finite")]
    NotFinite,

    #[error("box has no area ({width} x {height})")]
    EmptySize { width: f64, height: f64 },

    #[error("box extends outside the unit square (center ({x_center}, {y_center}), size {width} x {height})")]
    OutOfBounds {
        x_center: f64,
        y_center: f64,
        width: f64,
        height: f64,
    },
}

impl BoundingBox {
    /// Creates a box from a class id and normalized center/size values.
    pub fn new(
        class_id: u32,
        x_center: f64,
        y_center: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, InvalidBox> {
        if !(x_center.is_finite() && y_center.is_finite() && width.is_finite() && height.is_finite())
        {
            return Err(InvalidBox::NotFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(InvalidBox::EmptySize { width, height });
        }
        let out_of_bounds = x_center - width / 2.0 < -BOUNDS_EPS
            || x_center + width / 2.0 > 1.0 + BOUNDS_EPS
            || y_center - height / 2.0 < -BOUNDS_EPS
            || y_center + height / 2.0 > 1.0 + BOUNDS_EPS;
        if out_of_bounds {
            return Err(InvalidBox::OutOfBounds {
                x_center,
                y_center,
                width,
                height,
            });
        }

        Ok(Self {
            class_id,
            x_center,
            y_center,
            width,
            height,
        })
    }

    /// Creates a box from two normalized corner points, in any order.
    ///
    /// This is the shape a completed drag gesture arrives in. Degenerate
    /// rectangles (a corner pair collapsed onto a line or point) fail the
    /// positive-extent check like any other empty box.
    pub fn from_corners(
        class_id: u32,
        a: Coord<Normalized>,
        b: Coord<Normalized>,
    ) -> Result<Self, InvalidBox> {
        let (center, width, height) = rect_from_corners(a, b);
        Self::new(class_id, center.x, center.y, width, height)
    }

    /// Returns the class id.
    #[inline]
    pub fn class_id(&self) -> u32 {
        self.class_id
    }

    /// Returns the normalized x coordinate of the box center.
    #[inline]
    pub fn x_center(&self) -> f64 {
        self.x_center
    }

    /// Returns the normalized y coordinate of the box center.
    #[inline]
    pub fn y_center(&self) -> f64 {
        self.y_center
    }

    /// Returns the normalized width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the normalized height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the top-left and bottom-right corners in normalized space.
    ///
    /// Used by drawing surfaces to place the overlay rectangle.
    pub fn corners(&self) -> (Coord<Normalized>, Coord<Normalized>) {
        (
            Coord::new(
                self.x_center - self.width / 2.0,
                self.y_center - self.height / 2.0,
            ),
            Coord::new(
                self.x_center + self.width / 2.0,
                self.y_center + self.height / 2.0,
            ),
        )
    }
}

impl std::fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundingBox")
            .field("class_id", &self.class_id)
            .field("x_center", &self.x_center)
            .field("y_center", &self.y_center)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
