//! Shared helpers used across features.

pub mod task;
pub mod text;

pub use task::{TaskId, TaskSeq, TaskState, Tasks};
pub use text::{sanitize_for_display, truncate_start_with_ellipsis, truncate_with_ellipsis};
