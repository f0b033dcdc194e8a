//! UI Components
//!
//! Leptos components of the reorderable list.

mod draggable_list;
mod list_row;

pub use draggable_list::DraggableList;
pub use list_row::ListRow;
