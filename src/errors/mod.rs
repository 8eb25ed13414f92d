//! Centralized error handling
//!
//! Structured, typed errors for everything the CLI anticipates; anything
//! unanticipated propagates to the process boundary unchanged.

pub mod types;

pub use types::{AppError, AppResult};
