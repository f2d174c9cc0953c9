//! Currency amounts and dated payments.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, Date};

/// An amount of money in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// The currency of the amount.
    pub currency: Currency,
    /// The amount, positive when received and negative when paid.
    pub amount: Decimal,
}

impl CurrencyAmount {
    /// Creates an amount in the given currency.
    #[must_use]
    pub fn of(currency: Currency, amount: impl Into<Decimal>) -> Self {
        Self {
            currency,
            amount: amount.into(),
        }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::of(currency, Decimal::ZERO)
    }

    /// Returns the amount as a floating point number.
    #[must_use]
    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }

    /// Returns a copy of this amount with the sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::of(self.currency, -self.amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

/// A single payment of a known amount on a known date.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{Currency, CurrencyAmount, Date, Payment};
///
/// let payment = Payment::of(
///     CurrencyAmount::of(Currency::GBP, 1000),
///     Date::from_ymd(2015, 8, 21).unwrap(),
/// );
/// assert_eq!(payment.currency(), Currency::GBP);
/// assert_eq!(payment.to_string(), "GBP 1000 on 2015-08-21");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// The amount of the payment.
    pub value: CurrencyAmount,
    /// The date the payment is made.
    pub date: Date,
}

impl Payment {
    /// Creates a payment of an amount on a date.
    #[must_use]
    pub fn of(value: CurrencyAmount, date: Date) -> Self {
        Self { value, date }
    }

    /// Returns the currency of the payment.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.value.currency
    }

    /// Returns the amount of the payment.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.value.amount
    }

    /// Returns a copy of this payment made on a different date.
    #[must_use]
    pub fn with_date(&self, date: Date) -> Self {
        Self::of(self.value, date)
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.value, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_amount() {
        let amount = CurrencyAmount::of(Currency::GBP, dec!(1000.50));
        assert_eq!(amount.amount_f64(), 1000.5);
        assert_eq!(amount.negated().amount, dec!(-1000.50));
        assert_eq!(CurrencyAmount::zero(Currency::USD).amount, Decimal::ZERO);
    }

    #[test]
    fn test_payment_with_date() {
        let date = Date::from_ymd(2015, 8, 22).unwrap();
        let moved = Date::from_ymd(2015, 8, 24).unwrap();
        let payment = Payment::of(CurrencyAmount::of(Currency::GBP, 1000), date);

        let adjusted = payment.with_date(moved);
        assert_eq!(adjusted.date, moved);
        assert_eq!(adjusted.value, payment.value);
    }
}
