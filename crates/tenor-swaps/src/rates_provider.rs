//! Market data needed to price payment periods.

use std::collections::HashMap;

use tenor_core::types::{Currency, Date};
use tenor_core::{TenorError, TenorResult};

/// Days per year used to convert dates into curve time.
const DAYS_PER_YEAR: f64 = 365.0;

/// A source of discount factors and forward rates as of a valuation date.
///
/// Pricers only read from the provider. Implementations must be safe to share
/// between threads.
pub trait RatesProvider: Send + Sync {
    /// The valuation date.
    fn valuation_date(&self) -> Date;

    /// Discount factor for a payment in the currency on the date.
    fn discount_factor(&self, currency: Currency, date: Date) -> TenorResult<f64>;

    /// Forward rate of the index over the period from `start` to `end`.
    fn forward_rate(&self, index: &str, start: Date, end: Date) -> TenorResult<f64>;

    /// Curve time of the date, in years from the valuation date (Act/365F).
    fn relative_time(&self, date: Date) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let days = self.valuation_date().days_between(&date) as f64;
        days / DAYS_PER_YEAR
    }
}

/// A rates provider with flat curves.
///
/// Each currency discounts at a single continuously compounded zero rate and
/// each index forecasts a single forward rate.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{Currency, Date};
/// use tenor_swaps::rates_provider::{RatesProvider, SimpleRatesProvider};
///
/// let valuation = Date::from_ymd(2015, 1, 1).unwrap();
/// let provider = SimpleRatesProvider::new(valuation).with_zero_rate(Currency::GBP, 0.02);
///
/// let df = provider.discount_factor(Currency::GBP, valuation).unwrap();
/// assert!((df - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleRatesProvider {
    valuation_date: Date,
    zero_rates: HashMap<Currency, f64>,
    forward_rates: HashMap<String, f64>,
}

impl SimpleRatesProvider {
    /// Creates a provider with no curves.
    #[must_use]
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            zero_rates: HashMap::new(),
            forward_rates: HashMap::new(),
        }
    }

    /// Adds a flat zero rate for a currency.
    #[must_use]
    pub fn with_zero_rate(mut self, currency: Currency, rate: f64) -> Self {
        self.zero_rates.insert(currency, rate);
        self
    }

    /// Adds a flat forward rate for an index.
    #[must_use]
    pub fn with_forward_rate(mut self, index: impl Into<String>, rate: f64) -> Self {
        self.forward_rates.insert(index.into(), rate);
        self
    }

    /// The zero rate of a currency, if present.
    #[must_use]
    pub fn zero_rate(&self, currency: Currency) -> Option<f64> {
        self.zero_rates.get(&currency).copied()
    }
}

impl RatesProvider for SimpleRatesProvider {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn discount_factor(&self, currency: Currency, date: Date) -> TenorResult<f64> {
        let rate = self
            .zero_rate(currency)
            .ok_or_else(|| TenorError::unknown_reference("discount curve", currency.code()))?;
        Ok((-rate * self.relative_time(date)).exp())
    }

    fn forward_rate(&self, index: &str, start: Date, end: Date) -> TenorResult<f64> {
        if end < start {
            return Err(TenorError::invalid_date(format!(
                "forward period ends {end} before it starts {start}"
            )));
        }
        self.forward_rates
            .get(index)
            .copied()
            .ok_or_else(|| TenorError::unknown_reference("rate index", index))
    }
}
