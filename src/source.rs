//! Item Sources
//!
//! Where the list's initial items come from. The list itself only ever
//! receives a `Vec<Item>`.

use std::collections::HashSet;

use crate::error::LoadError;
use crate::models::Item;

/// Id of the `<script type="application/json">` element holding page-supplied items
pub const ITEMS_ELEMENT_ID: &str = "draggable-list-items";

pub trait ItemSource {
    fn load(&self) -> Result<Vec<Item>, LoadError>;
}

/// Compiled-in sample content
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleItems;

impl ItemSource for SampleItems {
    fn load(&self) -> Result<Vec<Item>, LoadError> {
        validate(vec![
            Item::new("1", "Scotland Island", "Sydney, Australia", "images/island.svg"),
            Item::new("2", "The Charles Grand Brasserie", "Lorem ipsum, Dolor", "images/charlesBar.svg"),
            Item::new("3", "Bridge Climb", "Dolor, Sit amet", "images/jump.svg"),
            Item::new("4", "Scotland Island", "Sydney, Australia", "images/boat.svg"),
            Item::new("5", "Calm bar", "Etcetera veni, Vidi vici", "images/bar.svg"),
            Item::new("6", "Vivid Festival", "Sydney, Australia", "images/festival.svg"),
        ])
    }
}

/// Items from a JSON array
#[derive(Clone, Debug)]
pub struct JsonItems(pub String);

impl ItemSource for JsonItems {
    fn load(&self) -> Result<Vec<Item>, LoadError> {
        let items: Vec<Item> = serde_json::from_str(&self.0)?;
        validate(items)
    }
}

/// Items from JSON embedded in the page
#[derive(Clone, Debug)]
pub struct ElementItems {
    pub element_id: String,
}

impl Default for ElementItems {
    fn default() -> Self {
        Self { element_id: ITEMS_ELEMENT_ID.to_string() }
    }
}

impl ItemSource for ElementItems {
    fn load(&self) -> Result<Vec<Item>, LoadError> {
        let raw = read_element_text(&self.element_id)
            .ok_or_else(|| LoadError::MissingElement(self.element_id.clone()))?;
        JsonItems(raw).load()
    }
}

/// Try `primary`, fall back to `fallback` on any error
pub struct FallbackSource<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P: ItemSource, F: ItemSource> ItemSource for FallbackSource<P, F> {
    fn load(&self) -> Result<Vec<Item>, LoadError> {
        match self.primary.load() {
            Ok(items) => Ok(items),
            Err(LoadError::MissingElement(id)) => {
                log::debug!("[SOURCE] #{} not present, using fallback", id);
                self.fallback.load()
            }
            Err(e) => {
                log::warn!("[SOURCE] {}, using fallback", e);
                self.fallback.load()
            }
        }
    }
}

/// Reject lists whose ids are empty or repeated
pub fn validate(items: Vec<Item>) -> Result<Vec<Item>, LoadError> {
    let mut seen = HashSet::new();
    for (position, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(LoadError::EmptyId(position));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(LoadError::DuplicateId(item.id.clone()));
        }
    }
    Ok(items)
}

/// Text content of the element with `id`, if the page has one
pub fn read_element_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}
