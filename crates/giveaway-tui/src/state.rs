//! Application state.
//!
//! The reducer in `update.rs` is the only place that mutates this; render
//! functions take it by shared reference.

use std::time::Duration;

use giveaway_core::auth::Access;
use giveaway_core::config::Config;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthState;
use crate::features::draw::{DrawState, FormState};
use crate::features::lectures::LecturesState;

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Giveaway,
}

/// Static page settings resolved from config.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub draw_delay: Duration,
}

impl PageConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            draw_delay: config.draw_delay(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub route: Route,
    pub page: PageConfig,
    pub auth: AuthState,
    pub draw: DrawState,
    pub form: FormState,
    pub lectures: LecturesState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub spinner_frame: usize,
}

impl AppState {
    /// Builds the pre-mount state. The route starts on the giveaway page but
    /// nothing protected renders until the gate sets `auth.authorized`.
    pub fn new(page: PageConfig, access: Access) -> Self {
        Self {
            should_quit: false,
            route: Route::Giveaway,
            page,
            auth: AuthState::new(access),
            draw: DrawState::default(),
            form: FormState::default(),
            lectures: LecturesState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    /// True while a draw request is in flight.
    pub fn is_loading(&self) -> bool {
        self.tasks.draw.is_running()
    }
}
