//! List Row Component
//!
//! A single draggable row: thumbnail, primary label, location line.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::ListContext;
use crate::models::Item;
use crate::store::{store_item_at, use_list_store};

#[component]
pub fn ListRow(
    index: usize,
    item: Item,
    /// Called by the source row when a gesture completes with a move
    on_reorder: Callback<Reorder>,
) -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");
    let store = use_list_store();
    let dnd = ctx.dnd;

    let preview = ctx.with_config(|c| DomDragPreview::new(c.preview.clone()));
    let on_dragstart = make_on_dragstart(dnd, index, item.id.clone(), preview, move || {
        store_item_at(&store, index).map(|item| PreviewContent {
            image_src: item.image_ref,
            label: item.primary_label,
        })
    });
    let on_dragenter = make_on_dragenter(dnd, index);
    let on_dragover = make_on_dragover(dnd);
    let on_drop = make_on_drop(dnd);
    let on_dragend = make_on_dragend(dnd, move |reorder| on_reorder.run(reorder));

    // Visual state
    let is_dragging = move || dnd.is_dragging(index);
    let is_drop_target = move || dnd.is_drop_target(index);
    let row_style = move || ctx.with_config(|c| c.row_style(is_drop_target()));
    let secondary_style = move || ctx.with_config(|c| c.secondary_style(is_dragging()));
    let thumbnail_style = ctx.with_config(|c| format!("width: {0}px; height: {0}px;", c.thumbnail_px));
    let location_icon = ctx.with_config(|c| c.location_icon.clone());

    let row_class = move || {
        let mut c = String::from("list-row");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            style=row_style
            on:dragstart=on_dragstart
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <div class="row-content">
                <div class="row-thumbnail" style=thumbnail_style>
                    <img src=item.image_ref.clone() alt=item.primary_label.clone() />
                </div>
                <div class="row-labels">
                    <div class="row-primary">{item.primary_label.clone()}</div>
                    <div class="row-secondary">
                        <img class="row-icon" src=location_icon alt="Icon" width="16" height="16" />
                        <div class="row-secondary-text" style=secondary_style>
                            {item.secondary_label.clone()}
                        </div>
                    </div>
                </div>
            </div>
        </li>
    }
}
