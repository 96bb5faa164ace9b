//! Draw feature slice.
//!
//! Owns the lecture id form, the displayed result, and the request
//! lifecycle of a single draw. At most one draw runs at a time; while it
//! runs the form is replaced by a spinner and key input is ignored.

mod render;
mod state;
mod update;

pub use render::{form_lines, loading_lines, result_line};
pub use state::{
    DrawResult, DrawState, FieldError, FormField, FormState, INVALID_ID_MESSAGE, PLACEHOLDER,
};
pub use update::{clear_result, handle_draw_completed, submit};
