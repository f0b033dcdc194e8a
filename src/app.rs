//! Draggable List App
//!
//! Loads items and settings from the page, then mounts the list.

use leptos::prelude::*;

use crate::components::DraggableList;
use crate::config::ReorderConfig;
use crate::models::Item;
use crate::source::{ElementItems, FallbackSource, ItemSource, SampleItems};

/// Page-embedded items if present, sample items otherwise
pub fn load_initial_items() -> Vec<Item> {
    let source = FallbackSource {
        primary: ElementItems::default(),
        fallback: SampleItems,
    };
    match source.load() {
        Ok(items) => items,
        Err(e) => {
            log::error!("[APP] Failed to load items: {}", e);
            Vec::new()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let items = load_initial_items();
    let config = ReorderConfig::load();
    log::info!("[APP] Loaded {} items", items.len());

    view! {
        <main class="app-layout">
            <DraggableList initial_items=items config=config />
        </main>
    }
}
