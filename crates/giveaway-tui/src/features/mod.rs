//! Feature slices for the page (state/update/render per slice).

pub mod auth;
pub mod draw;
pub mod lectures;
