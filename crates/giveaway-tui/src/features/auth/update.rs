//! Auth feature reducer.

use tracing::info;

use super::AuthState;
use crate::state::Route;

/// Runs the gate and returns the route the page should show.
pub fn handle_mount(auth: &mut AuthState) -> Route {
    auth.authorized = auth.access.is_authorized();
    if auth.authorized {
        info!("session authorized, opening giveaway page");
        Route::Giveaway
    } else {
        info!("no authorized session, redirecting to home");
        Route::Home
    }
}
