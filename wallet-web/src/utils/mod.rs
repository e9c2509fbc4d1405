//! Browser helpers

pub mod alert;
pub mod constants;
