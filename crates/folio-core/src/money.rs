//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! single currency formatter used by every list view.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    The database stores cents, SUM() aggregates cents, and only      │
//! │    the display boundary ever produces "$123.45" strings.            │
//! │                                                                     │
//! │  The ONE exception: the invoice edit form pre-fills a numeric       │
//! │  amount in dollars (to_dollars), never a formatted string. That     │
//! │  asymmetry is intentional and must stay.                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::{format_currency, Money};
//!
//! // Create from cents (preferred)
//! let amount = Money::from_cents(1099); // $10.99
//!
//! // List views: formatted string
//! assert_eq!(amount.format(), "$10.99");
//! assert_eq!(format_currency(1099), "$10.99");
//!
//! // Edit form: numeric dollars
//! assert_eq!(amount.to_dollars(), 10.99);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for credits and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let amount = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(amount.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts to a numeric dollar amount (division by 100).
    ///
    /// ## The Edit-Form Path
    /// This is the ONLY sanctioned numeric major-unit conversion. It exists
    /// for pre-filling the invoice edit form, which needs `123.45`, not
    /// `"$123.45"`. Every list view goes through [`Money::format`] instead.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(12345).to_dollars(), 123.45);
    /// ```
    #[inline]
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Formats as a US-locale currency string: `$` symbol, thousands
    /// grouping, exactly two decimal places, leading `-` for negatives.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(0).format(), "$0.00");
    /// assert_eq!(Money::from_cents(123456789).format(), "$1,234,567.89");
    /// assert_eq!(Money::from_cents(-550).format(), "-$5.50");
    /// ```
    pub fn format(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}${}.{:02}",
            sign,
            group_thousands(abs / 100),
            abs % 100
        )
    }
}

/// Formats an integer cents amount as a US-locale currency string.
///
/// Free-function convenience over [`Money::format`], used where query
/// shaping has a raw `i64` in hand (e.g. a coalesced `SUM`).
///
/// ## Example
/// ```rust
/// use folio_core::money::format_currency;
///
/// assert_eq!(format_currency(500), "$5.00");
/// ```
pub fn format_currency(cents: i64) -> String {
    Money::from_cents(cents).format()
}

/// Inserts `,` separators every three digits.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display is the same US-locale rendering the list views use.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1), "$0.01");
        assert_eq!(format_currency(99), "$0.99");
        assert_eq!(format_currency(100), "$1.00");
        assert_eq!(format_currency(500), "$5.00");
        assert_eq!(format_currency(300), "$3.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_currency(-550), "-$5.50");
        assert_eq!(format_currency(-1), "-$0.01");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(123456789), "$1,234,567.89");
        assert_eq!(format_currency(100000000000), "$1,000,000,000.00");
        assert_eq!(format_currency(-123456), "-$1,234.56");
    }

    #[test]
    fn test_display_matches_format() {
        let money = Money::from_cents(1099);
        assert_eq!(format!("{}", money), "$10.99");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_to_dollars() {
        // The edit form receives a number, never a formatted string
        assert_eq!(Money::from_cents(12345).to_dollars(), 123.45);
        assert_eq!(Money::from_cents(0).to_dollars(), 0.0);
        assert_eq!(Money::from_cents(-550).to_dollars(), -5.5);
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(!Money::from_cents(1).is_zero());
    }

    #[test]
    fn test_serde_roundtrip() {
        let money = Money::from_cents(1099);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "1099");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }
}
