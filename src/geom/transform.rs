//! Pure projection math between screen, image, and normalized space.
//!
//! A [`Projection`] captures how the active image is currently placed on the
//! canvas: one combined scale factor (fit scale times zoom) and a pan offset
//! in screen pixels. All conversions funnel through it so the arithmetic
//! lives in exactly one place and can be tested without a display.

use super::{Coord, Normalized, Pixel, Screen};

/// Screen-space placement of the active image.
///
/// `scale` is screen pixels per image pixel; `pan` is the screen position of
/// the image's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub pan: Coord<Screen>,
}

impl Projection {
    /// Creates a projection from a combined scale and a pan offset.
    #[inline]
    pub fn new(scale: f64, pan: Coord<Screen>) -> Self {
        Self { scale, pan }
    }

    /// Converts a screen point to image-pixel coordinates.
    ///
    /// Inverts the pan offset, then the scale. The result may lie outside
    /// the image bounds; callers that need an in-image point should go
    /// through [`Projection::screen_to_normalized`], which clamps.
    #[inline]
    pub fn screen_to_image(&self, point: Coord<Screen>) -> Coord<Pixel> {
        Coord::new(
            (point.x - self.pan.x) / self.scale,
            (point.y - self.pan.y) / self.scale,
        )
    }

    /// Converts an image-pixel point to screen coordinates.
    #[inline]
    pub fn image_to_screen(&self, point: Coord<Pixel>) -> Coord<Screen> {
        Coord::new(
            point.x * self.scale + self.pan.x,
            point.y * self.scale + self.pan.y,
        )
    }

    /// Converts a screen point to normalized coordinates, clamped to [0,1].
    ///
    /// Clamping means a drag that starts inside the image and ends outside
    /// it still yields a usable corner instead of being rejected.
    pub fn screen_to_normalized(
        &self,
        point: Coord<Screen>,
        image_size: (u32, u32),
    ) -> Coord<Normalized> {
        let image_point = self.screen_to_image(point);
        Coord::new(
            (image_point.x / image_size.0 as f64).clamp(0.0, 1.0),
            (image_point.y / image_size.1 as f64).clamp(0.0, 1.0),
        )
    }

    /// Converts a normalized point to screen coordinates.
    ///
    /// Left inverse of [`Projection::screen_to_normalized`] up to
    /// floating-point rounding, for points that map inside the image.
    pub fn normalized_to_screen(
        &self,
        point: Coord<Normalized>,
        image_size: (u32, u32),
    ) -> Coord<Screen> {
        self.image_to_screen(Coord::new(
            point.x * image_size.0 as f64,
            point.y * image_size.1 as f64,
        ))
    }
}

/// Center/size form of the rectangle spanned by two corner points.
///
/// The corners may arrive in any order; width and height are absolute
/// differences and the center is the midpoint.
#[inline]
pub fn rect_from_corners<TSpace>(a: Coord<TSpace>, b: Coord<TSpace>) -> (Coord<TSpace>, f64, f64) {
    let center = Coord::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    (center, (b.x - a.x).abs(), (b.y - a.y).abs())
}

/// Returns true if the rectangle spanned by two points exceeds the minimum
/// size on both axes.
///
/// Used to gate completed drags: a near-click produces no box.
#[inline]
pub fn exceeds_min_size<TSpace>(a: Coord<TSpace>, b: Coord<TSpace>, min: f64) -> bool {
    (b.x - a.x).abs() > min && (b.y - a.y).abs() > min
}
