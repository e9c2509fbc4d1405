//! Application constants

// UI constants
pub const BALANCE_REFRESH_MS: u32 = 12_000;
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

// Alert texts of the fund form
pub const FUND_FAILED: &str = "Failed to fund contract";
