//! In-memory label store for the currently active image.

use super::bbox::BoundingBox;

/// The ordered set of boxes drawn on one image.
///
/// Insertion order is drawing order, and undo removes the most recently
/// appended element (LIFO). Because [`BoundingBox`] is validated on
/// construction, every element a `LabelSet` holds satisfies the box
/// invariant; no operation here can break that.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelSet {
    boxes: Vec<BoundingBox>,
}

impl LabelSet {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a label set from already-constructed boxes, keeping order.
    pub fn from_boxes(boxes: Vec<BoundingBox>) -> Self {
        Self { boxes }
    }

    /// Appends a box at the end of the drawing order.
    pub fn add(&mut self, bbox: BoundingBox) {
        self.boxes.push(bbox);
    }

    /// Removes and returns the most recently added box.
    ///
    /// Returns `None` on an empty set; "nothing to undo" is an expected
    /// no-op, not an error.
    pub fn undo(&mut self) -> Option<BoundingBox> {
        self.boxes.pop()
    }

    /// Removes every box unconditionally.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Replaces the whole contents, keeping the given order.
    ///
    /// Used when loading a persisted label file for a newly active image.
    pub fn replace_all(&mut self, boxes: Vec<BoundingBox>) {
        self.boxes = boxes;
    }

    /// Read access to the boxes in drawing order.
    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    /// Number of boxes in the set.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the set holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
