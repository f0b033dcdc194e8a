//! List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_dragdrop::Reorder;
use reactive_stores::Store;

use crate::models::Item;

/// Ordered items; only changed by completed reorders
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    pub items: Vec<Item>,
}

impl ListState {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Apply a move, returning false if it no longer fits the list
    pub fn apply(&mut self, reorder: Reorder) -> bool {
        reorder.apply(&mut self.items)
    }
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

/// Get the list store from context
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Move an item in the store
pub fn store_apply_reorder(store: &ListStore, reorder: Reorder) -> bool {
    reorder.apply(&mut *store.items().write())
}

/// Item at `index`, without tracking
pub fn store_item_at(store: &ListStore, index: usize) -> Option<Item> {
    store.items().with_untracked(|items| items.get(index).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_dragdrop::{create_dnd_signals, end_drag, DragState};

    fn ids(state: &ListState) -> Vec<&str> {
        state.items.iter().map(|i| i.id.as_str()).collect()
    }

    fn abcd() -> ListState {
        ListState::new(
            ["A", "B", "C", "D"]
                .iter()
                .map(|id| Item::new(id, id, "", ""))
                .collect(),
        )
    }

    #[test]
    fn test_apply_reorder() {
        let mut state = abcd();
        assert!(state.apply(Reorder { from: 0, to: 2 }));
        assert_eq!(ids(&state), vec!["B", "C", "A", "D"]);
        assert!(state.apply(Reorder { from: 2, to: 0 }));
        assert_eq!(ids(&state), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_stale_reorder_ignored() {
        let mut state = abcd();
        assert!(!state.apply(Reorder { from: 4, to: 0 }));
        assert_eq!(ids(&state), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_store_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(abcd());
            assert!(store_apply_reorder(&store, Reorder { from: 2, to: 0 }));
            let order: Vec<String> = store.items().get_untracked().into_iter().map(|i| i.id).collect();
            assert_eq!(order, vec!["C", "A", "B", "D"]);
            assert_eq!(store_item_at(&store, 1).map(|i| i.id), Some("A".to_string()));
            assert_eq!(store_item_at(&store, 9), None);
        });
    }

    #[test]
    fn test_gesture_reaches_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(abcd());
            let dnd = create_dnd_signals();
            let mut state = DragState::default();
            state.start(0);
            state.enter(2);
            dnd.state_write.set(state);

            end_drag(&dnd, false, &|reorder: Reorder| {
                assert!(store_apply_reorder(&store, reorder));
            });

            let order: Vec<String> = store.items().get_untracked().into_iter().map(|i| i.id).collect();
            assert_eq!(order, vec!["B", "C", "A", "D"]);
            assert!(dnd.state_read.get_untracked().is_idle());
        });
    }
}
