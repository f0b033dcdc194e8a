//! Drag Gesture State
//!
//! Index bookkeeping for a single reorder gesture. No DOM access here,
//! so everything in this module runs under plain `cargo test`.

/// Transient state of the current drag gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Index of the row being dragged
    pub dragging: Option<usize>,
    /// Index of the row currently highlighted as insertion target
    pub drag_over: Option<usize>,
}

/// A completed move: remove at `from`, insert at `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        self.dragging.is_none() && self.drag_over.is_none()
    }

    /// Begin a gesture on `index`. Any stale target from an earlier gesture is dropped.
    pub fn start(&mut self, index: usize) {
        self.dragging = Some(index);
        self.drag_over = None;
    }

    /// Pointer entered row `index`. Returns true if the target changed.
    pub fn enter(&mut self, index: usize) -> bool {
        match self.dragging {
            Some(dragging) if dragging != index => {
                if self.drag_over == Some(index) {
                    return false;
                }
                self.drag_over = Some(index);
                true
            }
            _ => false,
        }
    }

    /// End the gesture, yielding the move to apply if there is one.
    /// Both indices are cleared whatever the outcome.
    pub fn finish(&mut self) -> Option<Reorder> {
        let dragging = self.dragging.take();
        let drag_over = self.drag_over.take();
        match (dragging, drag_over) {
            (Some(from), Some(to)) if from != to => Some(Reorder { from, to }),
            _ => None,
        }
    }

    /// Abort the gesture without moving anything
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.drag_over = None;
    }
}

impl Reorder {
    /// Apply to `items`. Returns false (and leaves `items` untouched) if either
    /// index is out of range.
    pub fn apply<T>(&self, items: &mut Vec<T>) -> bool {
        move_item(items, self.from, self.to)
    }
}

/// Remove the element at `from` and insert it at `to`, where `to` indexes the
/// sequence after removal.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from == to {
        return true;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
