//! Leptos DragDrop Utilities
//!
//! List reordering for Leptos using native HTML5 drag events
//! (`dragstart` / `dragenter` / `dragend`).

use leptos::prelude::*;
use web_sys::DragEvent;

pub mod gesture;
pub mod preview;

pub use gesture::{move_item, DragState, Reorder};
pub use preview::{DomDragPreview, DragPreview, PreviewContent, PreviewStyle};

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
}

impl DndSignals {
    /// Is row `index` the one being dragged (tracked)
    pub fn is_dragging(&self, index: usize) -> bool {
        self.state_read.get().dragging == Some(index)
    }

    /// Is row `index` the current insertion target (tracked)
    pub fn is_drop_target(&self, index: usize) -> bool {
        self.state_read.get().drag_over == Some(index)
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (state_read, state_write) = signal(DragState::default());
    DndSignals { state_read, state_write }
}

/// Create dragstart handler for a row
/// Records the gesture and hands the browser a drag preview
pub fn make_on_dragstart<P, C>(
    dnd: DndSignals,
    index: usize,
    payload: String,
    preview: P,
    content: C,
) -> impl Fn(DragEvent) + 'static
where
    P: DragPreview + 'static,
    C: Fn() -> Option<PreviewContent> + 'static,
{
    move |ev: DragEvent| {
        let mut state = dnd.state_read.get_untracked();
        state.start(index);
        dnd.state_write.set(state);
        log::debug!("[DND] dragstart index={}", index);

        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox will not start a drag without a payload
            if let Err(e) = dt.set_data("text/plain", &payload) {
                log::warn!("[DND] drag payload failed: {:?}", e);
            }
            if let Some(content) = content() {
                if let Err(e) = preview.show(&dt, &content) {
                    log::warn!("[DND] drag preview failed: {:?}", e);
                }
            }
        }
    }
}

/// Create dragenter handler for a row (becomes insertion target)
pub fn make_on_dragenter(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        let mut state = dnd.state_read.get_untracked();
        if state.enter(index) {
            log::debug!("[DND] dragenter index={}", index);
            dnd.state_write.set(state);
        }
    }
}

/// Create dragover handler marking the row as a valid drop target
pub fn make_on_dragover(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if dnd.state_read.get_untracked().dragging.is_none() {
            return;
        }
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}

/// Create drop handler; only stops the browser from navigating to the payload
pub fn make_on_drop(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if dnd.state_read.get_untracked().dragging.is_some() {
            ev.prevent_default();
        }
    }
}

/// Create dragend handler
/// Fires on the source row after drop or cancel; state is cleared in every case.
pub fn make_on_dragend<F>(dnd: DndSignals, on_reorder: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(Reorder) + 'static,
{
    move |ev: DragEvent| {
        let cancelled = ev
            .data_transfer()
            .map(|dt| is_cancelled(&dt.drop_effect()))
            .unwrap_or(false);
        end_drag(&dnd, cancelled, &on_reorder);
    }
}

/// The browser reports `dropEffect = "none"` on dragend for Escape or a drop
/// outside any row
pub fn is_cancelled(drop_effect: &str) -> bool {
    drop_effect == "none"
}

/// End drag operation
pub fn end_drag<F>(dnd: &DndSignals, cancelled: bool, on_reorder: &F)
where
    F: Fn(Reorder),
{
    let mut state = dnd.state_read.get_untracked();
    let reorder = if cancelled {
        state.cancel();
        None
    } else {
        state.finish()
    };
    dnd.state_write.set(state);

    match reorder {
        Some(reorder) => {
            log::debug!("[DND] dragend move {} -> {}", reorder.from, reorder.to);
            on_reorder(reorder);
        }
        None => log::debug!("[DND] dragend without move (cancelled={})", cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn with_dnd(f: impl FnOnce(DndSignals)) {
        let owner = Owner::new();
        owner.with(|| f(create_dnd_signals()));
    }

    #[test]
    fn test_end_drag_reports_move_and_clears() {
        with_dnd(|dnd| {
            dnd.state_write.set(DragState { dragging: Some(0), drag_over: Some(2) });
            let seen = RefCell::new(Vec::new());
            end_drag(&dnd, false, &|r: Reorder| seen.borrow_mut().push(r));
            assert_eq!(*seen.borrow(), vec![Reorder { from: 0, to: 2 }]);
            assert!(dnd.state_read.get_untracked().is_idle());
        });
    }

    #[test]
    fn test_cancelled_end_drag_does_not_move() {
        with_dnd(|dnd| {
            dnd.state_write.set(DragState { dragging: Some(0), drag_over: Some(2) });
            let seen = RefCell::new(Vec::new());
            end_drag(&dnd, true, &|r: Reorder| seen.borrow_mut().push(r));
            assert!(seen.borrow().is_empty());
            assert!(dnd.state_read.get_untracked().is_idle());
        });
    }

    #[test]
    fn test_drop_effect_none_cancels() {
        assert!(is_cancelled("none"));
        assert!(!is_cancelled("move"));
        assert!(!is_cancelled("copy"));
    }

    #[test]
    fn test_end_drag_without_target() {
        with_dnd(|dnd| {
            dnd.state_write.set(DragState { dragging: Some(1), drag_over: None });
            let seen = RefCell::new(Vec::new());
            end_drag(&dnd, false, &|r: Reorder| seen.borrow_mut().push(r));
            assert!(seen.borrow().is_empty());
            assert!(dnd.state_read.get_untracked().is_idle());
        });
    }
}
