//! Zoom, pan, and fit state for the active image.
//!
//! The viewport owns three numbers: the fit scale computed from canvas and
//! image dimensions, a zoom factor relative to that fit (1.0 means
//! fit-to-window), and a pan offset in screen pixels. Zooming is
//! anchor-preserving: the image point under the given screen point stays
//! put while the scale changes, which requires recomputing the pan offset
//! rather than scaling it.

use crate::config::{Config, FitMode};
use crate::geom::{Coord, Projection, Screen};

/// Zoom, pan, and fit state for one active image.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    fit_scale: f64,
    zoom: f64,
    pan: Coord<Screen>,
    image_size: (u32, u32),
    min_zoom: f64,
    max_zoom: f64,
}

impl ViewportState {
    /// Builds a viewport that fits the image to the canvas.
    ///
    /// The fit scale follows the configured fit policy and margin, zoom is
    /// reset to 1.0, and the pan offset centers the image on the canvas.
    /// A degenerate canvas (anything at or below one pixel per axis, as
    /// reported by a window system that has not laid out yet) falls back
    /// to a 1:1 fit scale.
    pub fn fit_to_window(canvas: (f64, f64), image_size: (u32, u32), config: &Config) -> Self {
        let image_w = image_size.0.max(1) as f64;
        let image_h = image_size.1.max(1) as f64;

        let fit_scale = if canvas.0 <= 1.0 || canvas.1 <= 1.0 {
            1.0
        } else {
            let scale_x = canvas.0 / image_w;
            let scale_y = canvas.1 / image_h;
            let base = match config.fit_mode {
                FitMode::Contain => scale_x.min(scale_y),
                FitMode::Cover => scale_x.max(scale_y),
            };
            base * config.fit_margin
        };

        let pan = Coord::new(
            (canvas.0 - image_w * fit_scale) / 2.0,
            (canvas.1 - image_h * fit_scale) / 2.0,
        );

        Self {
            fit_scale,
            zoom: 1.0,
            pan,
            image_size,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        }
    }

    /// Sets the zoom factor, keeping the image point under `anchor` fixed.
    ///
    /// The factor is silently clamped to the configured range; zoom is a
    /// continuous gesture, so out-of-range requests are not errors. A
    /// non-finite factor is ignored.
    pub fn zoom_to(&mut self, factor: f64, anchor: Coord<Screen>) {
        if !factor.is_finite() {
            return;
        }

        let old_scale = self.scale();
        self.zoom = factor.clamp(self.min_zoom, self.max_zoom);
        let ratio = self.scale() / old_scale;

        // The anchor keeps pointing at the same image pixel:
        //   anchor = p_img * scale + pan  before and after,
        // so the new pan is the anchor minus the scaled anchor-to-pan gap.
        self.pan = Coord::new(
            anchor.x - (anchor.x - self.pan.x) * ratio,
            anchor.y - (anchor.y - self.pan.y) * ratio,
        );
    }

    /// Shifts the pan offset by a screen-space delta, unconditionally.
    pub fn pan_by(&mut self, delta: (f64, f64)) {
        self.pan = Coord::new(self.pan.x + delta.0, self.pan.y + delta.1);
    }

    /// Combined scale: screen pixels per image pixel.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.fit_scale * self.zoom
    }

    /// The projection used to convert between screen and image space.
    pub fn projection(&self) -> Projection {
        Projection::new(self.scale(), self.pan)
    }

    /// Current zoom factor relative to the fit scale.
    #[inline]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    /// Scale at which the image exactly fits the canvas.
    #[inline]
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Screen position of the image's top-left corner.
    #[inline]
    pub fn pan_offset(&self) -> Coord<Screen> {
        self.pan
    }

    /// Pixel dimensions of the active image.
    #[inline]
    pub fn image_size(&self) -> (u32, u32) {
        self.image_size
    }
}
