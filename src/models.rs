//! Frontend Models
//!
//! Data structures rendered by the list.

use serde::{Deserialize, Serialize};

/// One row of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub primary_label: String,
    pub secondary_label: String,
    pub image_ref: String,
}

impl Item {
    pub fn new(id: &str, primary_label: &str, secondary_label: &str, image_ref: &str) -> Self {
        Self {
            id: id.to_string(),
            primary_label: primary_label.to_string(),
            secondary_label: secondary_label.to_string(),
            image_ref: image_ref.to_string(),
        }
    }
}
