//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_list, get_env_or, get_env_parse};
pub use time::{format_time, now_utc};
pub use validation::{validate_not_empty, validate_positive_amount, validate_ws_url};
