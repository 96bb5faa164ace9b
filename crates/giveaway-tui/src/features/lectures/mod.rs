//! Lecture list feature slice.
//!
//! The list is fetched once after the gate passes. Fetched lectures are
//! appended to whatever is already held and the whole list is re-sorted by
//! descending id.

mod render;
mod state;
mod update;

pub use render::render_lecture_list;
pub use state::LecturesState;
pub use update::{handle_lectures_loaded, start_load};
