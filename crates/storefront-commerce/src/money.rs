//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that totals like
//! `subtotal > 50.00` compare exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currency of a monetary value. All catalog data is in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
/// Ordering compares amounts first and is only meaningful within one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a USD amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(299.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 29999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Format whole units with thousands separators (e.g., "$403,000").
    pub fn display_whole(&self) -> String {
        let whole = self.to_decimal().round() as i64;
        let sign = if whole < 0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.currency.symbol(),
            group_thousands(whole.unsigned_abs())
        )
    }

    /// Try to subtract another Money value, returning None if currencies
    /// don't match or the difference overflows.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a scalar, saturating at the representable range.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Multiply by a decimal factor, rounding half away from zero.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

/// Insert `,` between groups of three digits.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match.
    fn add(self, other: Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "Currency mismatch in addition"
        );
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match.
    fn sub(self, other: Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "Currency mismatch in subtraction"
        );
        Money::new(
            self.amount_cents.saturating_sub(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(899.99, Currency::USD);
        assert_eq!(m.amount_cents, 89999);

        let m = Money::from_decimal(50.0, Currency::USD);
        assert_eq!(m.amount_cents, 5000);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::USD);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::usd(999).display(), "$9.99");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
    }

    #[test]
    fn test_money_display_whole() {
        assert_eq!(Money::usd(40_300_000).display_whole(), "$403,000");
        assert_eq!(Money::usd(99_900).display_whole(), "$999");
        assert_eq!(Money::usd(12_345_678_900).display_whole(), "$123,456,789");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::usd(1000);
        let b = Money::usd(300);
        assert_eq!((a + b).amount_cents, 1300);
        assert_eq!((a - b).amount_cents, 700);
        assert_eq!((a * 3).amount_cents, 3000);
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::usd(20000); // $200.00
        assert_eq!(m.percentage(10.0).amount_cents, 2000);

        // $0.05 * 10% = half a cent, rounds away from zero
        assert_eq!(Money::usd(5).percentage(10.0).amount_cents, 1);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::usd(100), Money::usd(250)];
        assert_eq!(Money::sum(values.iter(), Currency::USD).amount_cents, 350);
        assert!(Money::sum(std::iter::empty(), Currency::USD).is_zero());
    }

    #[test]
    fn test_money_try_subtract() {
        let threshold = Money::usd(5000);
        assert_eq!(
            threshold.try_subtract(&Money::usd(4999)),
            Some(Money::usd(1))
        );
        assert!(Money::usd(i64::MIN).try_subtract(&Money::usd(1)).is_none());
    }

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::default(), Currency::USD);
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!(Currency::USD.symbol(), "$");
    }
}
