//! Core giveaway library (config, logging, session auth, saphira client).

pub mod auth;
pub mod config;
pub mod logging;
pub mod saphira;
