//! # Validation Utilities
//!
//! Input validation helpers for form fields and configuration values.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Parse a strictly positive integer amount (in the token's smallest unit).
///
/// Decimal, negative and non-numeric input is rejected.
pub fn validate_positive_amount(value: &str, field_name: &str) -> Result<u128, String> {
    validate_not_empty(value, field_name)?;

    let amount: u128 = value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number", field_name))?;

    if amount == 0 {
        return Err(format!("{} must be greater than zero", field_name));
    }
    Ok(amount)
}

/// Validate a WebSocket endpoint URL (`ws://` or `wss://` with a host).
pub fn validate_ws_url(url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("wss://")
        .or_else(|| url.strip_prefix("ws://"))
        .ok_or_else(|| format!("Endpoint must start with ws:// or wss://: {}", url))?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(format!("Endpoint is missing a host: {}", url));
    }
    Ok(())
}
