#![allow(dead_code)]

use boxmark::config::Config;
use boxmark::geom::Coord;
use boxmark::label::{BoundingBox, LabelSet};
use boxmark::viewport::ViewportState;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Normalized values are written at six decimal places, so a formatting
/// round trip moves a coordinate by at most one step of that grid.
pub const EPS_FORMAT: f64 = 1e-6;

/// Transform round trips only lose bits to floating-point arithmetic, but
/// a tiny image at minimum zoom divides those bits by a very small scale.
pub const EPS_TRANSFORM: f64 = 1e-7;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Canvas sizes large enough that fit_to_window never takes its
/// degenerate-canvas fallback.
pub fn arb_canvas() -> BoxedStrategy<(f64, f64)> {
    (64u32..=4096, 64u32..=4096)
        .prop_map(|(w, h)| (w as f64, h as f64))
        .boxed()
}

pub fn arb_image_size() -> BoxedStrategy<(u32, u32)> {
    ((2u32..=4096), (2u32..=4096)).boxed()
}

/// A viewport in an arbitrary but reachable state: fitted to some canvas,
/// zoomed about some anchor, then panned.
pub fn arb_viewport() -> BoxedStrategy<ViewportState> {
    (
        arb_canvas(),
        arb_image_size(),
        // Zoom factors spanning the default clamp range, in 0.1 steps.
        1u32..=80,
        (-2000i32..=2000, -2000i32..=2000),
        (0u32..=4096, 0u32..=4096),
    )
        .prop_map(|(canvas, image_size, zoom_tenths, pan, anchor)| {
            let config = Config::default();
            let mut view = ViewportState::fit_to_window(canvas, image_size, &config);
            view.zoom_to(
                zoom_tenths as f64 / 10.0,
                Coord::new(anchor.0 as f64, anchor.1 as f64),
            );
            view.pan_by((pan.0 as f64, pan.1 as f64));
            view
        })
        .boxed()
}

/// A valid box whose corners lie on the one-in-a-million grid the label
/// file format can represent.
pub fn arb_box() -> BoxedStrategy<BoundingBox> {
    (
        0u32..=99,
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
    )
        .prop_map(|(class_id, sx, sy, sw, sh)| box_from_seed(class_id, sx, sy, sw, sh))
        .boxed()
}

pub fn arb_label_set(max_boxes: usize) -> BoxedStrategy<LabelSet> {
    proptest::collection::vec(arb_box(), 0..=max_boxes)
        .prop_map(LabelSet::from_boxes)
        .boxed()
}

fn box_from_seed(class_id: u32, sx: u32, sy: u32, sw: u32, sh: u32) -> BoundingBox {
    const GRID: u32 = 1_000_000;

    let xmin = sx % (GRID - 1);
    let ymin = sy % (GRID - 1);
    let xmax = xmin + 1 + (sw % (GRID - xmin));
    let ymax = ymin + 1 + (sh % (GRID - ymin));

    let scale = GRID as f64;
    let x_center = (xmin + xmax) as f64 / (2.0 * scale);
    let y_center = (ymin + ymax) as f64 / (2.0 * scale);
    let width = (xmax - xmin) as f64 / scale;
    let height = (ymax - ymin) as f64 / scale;

    BoundingBox::new(class_id, x_center, y_center, width, height)
        .expect("seeded box lies inside the unit square")
}
