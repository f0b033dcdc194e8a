//! List Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::config::ReorderConfig;

/// Signals and settings shared by the list and its rows
#[derive(Clone, Copy)]
pub struct ListContext {
    /// Current drag gesture
    pub dnd: DndSignals,
    config: StoredValue<ReorderConfig>,
}

impl ListContext {
    pub fn new(dnd: DndSignals, config: ReorderConfig) -> Self {
        Self {
            dnd,
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&ReorderConfig) -> T) -> T {
        self.config.with_value(f)
    }
}
