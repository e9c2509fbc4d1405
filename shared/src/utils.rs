//! # Shared Utility Functions
//!
//! Display helpers used by the wallet core and the browser front-end.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Balance Formatting
//!
//! - [`format_balance`] - Render a planck amount in whole tokens with a symbol
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_balance};
//!
//! let address = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
//! assert_eq!(format_address(address, 4, 4), "5Grw...utQY");
//! assert_eq!(format_balance(12_345_000_000, 10, "DOT"), "1.2345 DOT");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
/// assert_eq!(format_address(addr, 4, 4), "5Grw...utQY");
/// assert_eq!(format_address(addr, 6, 6), "5Grwva...GKutQY");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // SS58 is base58, ASCII only
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Maximum fractional digits shown by [`format_balance`].
const BALANCE_PRECISION: usize = 4;

/// Format a balance expressed in the chain's smallest unit.
///
/// The fractional part is cut (not rounded) to four digits and trailing zeros
/// are dropped; the integer part gets comma separators.
///
/// ```rust
/// use shared::utils::format_balance;
///
/// assert_eq!(format_balance(0, 18, "PAS"), "0 PAS");
/// assert_eq!(format_balance(1_500_000_000_000_000_000, 18, "PAS"), "1.5 PAS");
/// assert_eq!(format_balance(12_345_678_900_000, 10, "DOT"), "1,234.5678 DOT");
/// ```
pub fn format_balance(free: u128, decimals: u8, symbol: &str) -> String {
    let decimals = decimals as usize;
    let digits = format!("{:0>width$}", free, width = decimals + 1);
    let (integer_part, fraction_part) = digits.split_at(digits.len() - decimals);

    let mut fraction: String = fraction_part.chars().take(BALANCE_PRECISION).collect();
    while fraction.ends_with('0') {
        fraction.pop();
    }

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    if fraction.is_empty() {
        format!("{} {}", integer_with_commas, symbol)
    } else {
        format!("{}.{} {}", integer_with_commas, fraction, symbol)
    }
}

/// Round monogram badge as an SVG data URI, usable directly as `<img src>`.
///
/// `color` is a CSS hex color such as `#004BFF`.
pub fn monogram_icon(label: &str, color: &str) -> String {
    let letter = label
        .chars()
        .find(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?');

    format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'>\
         <circle cx='16' cy='16' r='16' fill='{}'/>\
         <text x='16' y='21' font-size='15' font-family='sans-serif' text-anchor='middle' fill='white'>{}</text>\
         </svg>",
        color.replace('#', "%23"),
        letter
    )
}
