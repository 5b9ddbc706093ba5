//! The session controller: one active image, auto-saved label state.
//!
//! A [`Session`] sits between the GUI host and the rest of the core. The
//! host feeds it discrete events (open, navigate, drag, undo, clear, zoom,
//! pan, resize) and renders whatever [`Session::current_boxes`] and
//! [`Session::viewport`] report back. Every mutation persists immediately,
//! so there is no explicit save action anywhere; the one ordering rule is
//! flush-before-load on image switches, so an unsaved annotation can never
//! be lost to navigation.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::BoxmarkError;
use crate::geom::{exceeds_min_size, Coord, Screen};
use crate::label::{io_yolo, BoundingBox, LabelSet, LoadWarning};
use crate::layout::DatasetLayout;
use crate::viewport::ViewportState;

/// State owned for the currently active image.
#[derive(Clone, Debug)]
struct ActiveImage {
    path: PathBuf,
    label_path: PathBuf,
    labels: LabelSet,
    viewport: ViewportState,
}

/// Orchestrates label storage, persistence, and the viewport for one
/// active image at a time.
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    layout: DatasetLayout,
    canvas: (f64, f64),
    class_id: u32,
    active: Option<ActiveImage>,
}

impl Session {
    /// Creates a session with no active image.
    ///
    /// `canvas` is the drawing surface's current size; the host should
    /// keep it fresh through [`Session::on_resize`].
    pub fn new(config: Config, layout: DatasetLayout, canvas: (f64, f64)) -> Self {
        let class_id = config.default_class;
        Self {
            config,
            layout,
            canvas,
            class_id,
            active: None,
        }
    }

    /// Makes an image active, loading its persisted labels and fitting the
    /// viewport.
    ///
    /// If another image is active its labels are flushed first; a failed
    /// flush aborts the switch with the current image still active, so
    /// nothing unsaved is discarded. Returns the warnings for any label
    /// lines that had to be skipped during the load.
    pub fn open(
        &mut self,
        path: impl Into<PathBuf>,
        dims: (u32, u32),
    ) -> Result<Vec<LoadWarning>, BoxmarkError> {
        self.flush()?;

        let path = path.into();
        let label_path = self.layout.label_path(&path);
        let loaded = io_yolo::load_labels(&label_path)?;
        let viewport = ViewportState::fit_to_window(self.canvas, dims, &self.config);

        self.active = Some(ActiveImage {
            path,
            label_path,
            labels: loaded.labels,
            viewport,
        });
        Ok(loaded.warnings)
    }

    /// Switches to a different image; identical to [`Session::open`].
    ///
    /// Kept as its own name so hosts can wire next/previous/grid-selection
    /// events without caring whether an image was already active.
    pub fn navigate(
        &mut self,
        path: impl Into<PathBuf>,
        dims: (u32, u32),
    ) -> Result<Vec<LoadWarning>, BoxmarkError> {
        self.open(path, dims)
    }

    /// Flushes and deactivates the current image, if any.
    pub fn close(&mut self) -> Result<(), BoxmarkError> {
        self.flush()?;
        self.active = None;
        Ok(())
    }

    /// Handles a completed drag gesture from the drawing surface.
    ///
    /// The two points are screen-space corners; `canvas` is the surface
    /// size at the time of the drag and wins over any stale stored size.
    /// Drags below the minimum size, or collapsing to nothing once clamped
    /// into the image, are dropped without touching disk. A successful add
    /// is persisted immediately and the new box returned.
    pub fn on_drag(
        &mut self,
        start: Coord<Screen>,
        end: Coord<Screen>,
        canvas: (f64, f64),
    ) -> Result<Option<BoundingBox>, BoxmarkError> {
        if self.canvas != canvas {
            self.on_resize(canvas);
        }

        let class_id = self.class_id;
        let min_box_px = self.config.min_box_px;
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };

        if !exceeds_min_size(start, end, min_box_px) {
            debug!("dropping degenerate drag below {min_box_px}px");
            return Ok(None);
        }

        let projection = active.viewport.projection();
        let image_size = active.viewport.image_size();
        let a = projection.screen_to_normalized(start, image_size);
        let b = projection.screen_to_normalized(end, image_size);

        let bbox = match BoundingBox::from_corners(class_id, a, b) {
            Ok(bbox) => bbox,
            Err(err) => {
                debug!("dropping drag: {err}");
                return Ok(None);
            }
        };

        active.labels.add(bbox);
        io_yolo::save_labels(&active.labels, &active.label_path)?;
        Ok(Some(bbox))
    }

    /// Removes the most recently drawn box, persisting if one was removed.
    ///
    /// An empty store is an expected no-op with no persistence call.
    pub fn on_undo(&mut self) -> Result<Option<BoundingBox>, BoxmarkError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(None);
        };
        let Some(removed) = active.labels.undo() else {
            return Ok(None);
        };

        io_yolo::save_labels(&active.labels, &active.label_path)?;
        Ok(Some(removed))
    }

    /// Removes every box for the active image and persists the empty state.
    pub fn on_clear(&mut self) -> Result<(), BoxmarkError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };

        active.labels.clear();
        io_yolo::save_labels(&active.labels, &active.label_path)
    }

    /// Applies an anchor-preserving zoom to the active viewport.
    pub fn on_zoom(&mut self, factor: f64, anchor: Coord<Screen>) {
        if let Some(active) = self.active.as_mut() {
            active.viewport.zoom_to(factor, anchor);
        }
    }

    /// Pans the active viewport by a screen-space delta.
    pub fn on_pan(&mut self, delta: (f64, f64)) {
        if let Some(active) = self.active.as_mut() {
            active.viewport.pan_by(delta);
        }
    }

    /// Records a new canvas size and refits the active image to it.
    pub fn on_resize(&mut self, canvas: (f64, f64)) {
        self.canvas = canvas;
        if let Some(active) = self.active.as_mut() {
            active.viewport =
                ViewportState::fit_to_window(canvas, active.viewport.image_size(), &self.config);
        }
    }

    /// Sets the class id assigned to subsequently drawn boxes.
    pub fn set_class(&mut self, class_id: u32) {
        self.class_id = class_id;
    }

    /// The class id currently assigned to new boxes.
    pub fn class_id(&self) -> u32 {
        self.class_id
    }

    /// The boxes of the active image in drawing order, for overlay
    /// rendering. Empty when no image is active.
    pub fn current_boxes(&self) -> &[BoundingBox] {
        self.active
            .as_ref()
            .map(|active| active.labels.boxes())
            .unwrap_or(&[])
    }

    /// Path of the active image, if any.
    pub fn active_image(&self) -> Option<&Path> {
        self.active.as_ref().map(|active| active.path.as_path())
    }

    /// Viewport of the active image, if any.
    pub fn viewport(&self) -> Option<&ViewportState> {
        self.active.as_ref().map(|active| &active.viewport)
    }

    /// Returns true if the given image has persisted annotations.
    ///
    /// Used by grid views for their per-thumbnail indicator; works for any
    /// image, not just the active one.
    pub fn has_labels(&self, image_path: &Path) -> bool {
        io_yolo::has_labels(&self.layout.label_path(image_path))
    }

    fn flush(&self) -> Result<(), BoxmarkError> {
        if let Some(active) = &self.active {
            io_yolo::save_labels(&active.labels, &active.label_path)?;
        }
        Ok(())
    }
}
