//! vigilctl library
//!
//! Command-line administration client for the Vigil monitoring platform.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;

pub use config::{Config, ConfigManager};
pub use errors::{AppError, AppResult};
