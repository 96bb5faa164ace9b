//! Auth gate feature slice.
//!
//! The gate runs once when the page mounts. Until it has run nothing
//! protected is rendered, and an unauthorized session is sent to the home
//! route without ever issuing a request.

mod render;
mod state;
mod update;

pub use render::home_notice_lines;
pub use state::AuthState;
pub use update::handle_mount;
