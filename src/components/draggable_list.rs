//! Draggable List Component
//!
//! Ordered list of rows reorderable with native drag events.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, Reorder};
use reactive_stores::Store;

use crate::components::ListRow;
use crate::config::ReorderConfig;
use crate::context::ListContext;
use crate::models::Item;
use crate::store::{store_apply_reorder, ListState, ListStateStoreFields};

/// Reorderable list seeded with `initial_items`
#[component]
pub fn DraggableList(
    initial_items: Vec<Item>,
    #[prop(optional)] config: Option<ReorderConfig>,
) -> impl IntoView {
    let store = Store::new(ListState::new(initial_items));
    provide_context(store);

    let dnd = create_dnd_signals();
    provide_context(ListContext::new(dnd, config.unwrap_or_default()));

    let on_reorder = Callback::new(move |reorder: Reorder| {
        if store_apply_reorder(&store, reorder) {
            log::info!("[LIST] Moved row {} -> {}", reorder.from, reorder.to);
        } else {
            log::warn!("[LIST] Ignored stale move {} -> {}", reorder.from, reorder.to);
        }
    });

    let rows = move || store.items().get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <ul class="draggable-list mx-auto">
            <For
                each=rows
                // Index is part of the key so moved rows rebind their handlers
                key=|(index, item)| (*index, item.id.clone())
                children=move |(index, item)| {
                    view! { <ListRow index=index item=item on_reorder=on_reorder /> }
                }
            />
        </ul>
    }
}
