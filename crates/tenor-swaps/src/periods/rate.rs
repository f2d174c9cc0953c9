//! Rate based payment periods.

use serde::{Deserialize, Serialize};
use std::fmt;

use tenor_core::types::{Currency, Date};
use tenor_core::{TenorError, TenorResult};

fn default_gearing() -> f64 {
    1.0
}

/// How the rate of an accrual period is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RateComputation {
    /// A fixed rate, as a decimal (0.05 for 5%).
    Fixed {
        /// The rate.
        rate: f64,
    },
    /// A rate forecast from an index over the accrual period.
    Forward {
        /// The index name, such as `GBP-LIBOR-3M`.
        index: String,
    },
}

impl RateComputation {
    /// Creates a fixed rate computation.
    #[must_use]
    pub fn fixed(rate: f64) -> Self {
        RateComputation::Fixed { rate }
    }

    /// Creates a forward rate computation.
    pub fn forward(index: impl Into<String>) -> Self {
        RateComputation::Forward {
            index: index.into(),
        }
    }
}

impl fmt::Display for RateComputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateComputation::Fixed { rate } => write!(f, "Fixed({rate})"),
            RateComputation::Forward { index } => write!(f, "Forward({index})"),
        }
    }
}

/// A single accrual period within a rate payment period.
///
/// The accrued amount per unit notional is
/// `(gearing * rate + spread) * year_fraction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAccrualPeriod {
    /// Start of accrual.
    pub start_date: Date,
    /// End of accrual.
    pub end_date: Date,
    /// Year fraction between start and end under the leg's day count.
    pub year_fraction: f64,
    /// The rate.
    pub rate: RateComputation,
    /// Spread added after gearing, as a decimal.
    #[serde(default)]
    pub spread: f64,
    /// Multiplier applied to the rate.
    #[serde(default = "default_gearing")]
    pub gearing: f64,
}

impl RateAccrualPeriod {
    /// Creates an accrual period with no spread and unit gearing.
    #[must_use]
    pub fn new(start_date: Date, end_date: Date, year_fraction: f64, rate: RateComputation) -> Self {
        Self {
            start_date,
            end_date,
            year_fraction,
            rate,
            spread: 0.0,
            gearing: 1.0,
        }
    }

    /// Creates a fixed rate accrual period.
    #[must_use]
    pub fn fixed(start_date: Date, end_date: Date, year_fraction: f64, rate: f64) -> Self {
        Self::new(start_date, end_date, year_fraction, RateComputation::fixed(rate))
    }

    /// Creates a forward rate accrual period.
    #[must_use]
    pub fn forward(
        start_date: Date,
        end_date: Date,
        year_fraction: f64,
        index: impl Into<String>,
    ) -> Self {
        Self::new(start_date, end_date, year_fraction, RateComputation::forward(index))
    }

    /// Returns a copy with the spread set.
    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Returns a copy with the gearing set.
    #[must_use]
    pub fn with_gearing(mut self, gearing: f64) -> Self {
        self.gearing = gearing;
        self
    }

    /// Accrued amount per unit notional for the given observed rate.
    #[must_use]
    pub fn unit_amount(&self, rate: f64) -> f64 {
        (self.gearing * rate + self.spread) * self.year_fraction
    }
}

/// A payment period whose amount accrues at a rate over one or more accrual periods.
///
/// All accrual periods pay on the same payment date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePaymentPeriod {
    payment_date: Date,
    accrual_periods: Vec<RateAccrualPeriod>,
    currency: Currency,
    notional: f64,
}

impl RatePaymentPeriod {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> RatePaymentPeriodBuilder {
        RatePaymentPeriodBuilder::default()
    }

    /// The date the amount is paid.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// The accrual periods, in order.
    #[must_use]
    pub fn accrual_periods(&self) -> &[RateAccrualPeriod] {
        &self.accrual_periods
    }

    /// The payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The notional; negative when paying.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Start of the first accrual period.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.accrual_periods
            .first()
            .map_or(self.payment_date, |ap| ap.start_date)
    }

    /// End of the last accrual period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.accrual_periods
            .last()
            .map_or(self.payment_date, |ap| ap.end_date)
    }

    /// Returns a copy paying on a different date.
    #[must_use]
    pub fn with_payment_date(&self, payment_date: Date) -> Self {
        Self {
            payment_date,
            ..self.clone()
        }
    }
}

/// Builder for [`RatePaymentPeriod`].
#[derive(Debug, Clone, Default)]
pub struct RatePaymentPeriodBuilder {
    payment_date: Option<Date>,
    accrual_periods: Vec<RateAccrualPeriod>,
    currency: Option<Currency>,
    notional: Option<f64>,
}

impl RatePaymentPeriodBuilder {
    /// Sets the payment date.
    #[must_use]
    pub fn payment_date(mut self, date: Date) -> Self {
        self.payment_date = Some(date);
        self
    }

    /// Appends an accrual period.
    #[must_use]
    pub fn accrual_period(mut self, period: RateAccrualPeriod) -> Self {
        self.accrual_periods.push(period);
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Builds the period.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::MissingArgument` if a field is absent or there are
    /// no accrual periods, and `TenorError::InvalidDate` if an accrual period
    /// ends before it starts.
    pub fn build(self) -> TenorResult<RatePaymentPeriod> {
        let payment_date = self
            .payment_date
            .ok_or_else(|| TenorError::missing_argument("payment_date"))?;
        let currency = self
            .currency
            .ok_or_else(|| TenorError::missing_argument("currency"))?;
        let notional = self
            .notional
            .ok_or_else(|| TenorError::missing_argument("notional"))?;
        if self.accrual_periods.is_empty() {
            return Err(TenorError::missing_argument("accrual_periods"));
        }
        if let Some(ap) = self
            .accrual_periods
            .iter()
            .find(|ap| ap.end_date < ap.start_date)
        {
            return Err(TenorError::invalid_date(format!(
                "accrual period ends {} before it starts {}",
                ap.end_date, ap.start_date
            )));
        }
        Ok(RatePaymentPeriod {
            payment_date,
            accrual_periods: self.accrual_periods,
            currency,
            notional,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_builder() {
        let period = RatePaymentPeriod::builder()
            .payment_date(date(2014, 10, 6))
            .accrual_period(RateAccrualPeriod::fixed(date(2014, 7, 2), date(2014, 10, 2), 0.25, 0.0123))
            .currency(Currency::GBP)
            .notional(-1_000_000.0)
            .build()
            .unwrap();

        assert_eq!(period.start_date(), date(2014, 7, 2));
        assert_eq!(period.end_date(), date(2014, 10, 2));
        assert_eq!(period.payment_date(), date(2014, 10, 6));
        assert_eq!(period.currency(), Currency::GBP);
        assert_relative_eq!(period.notional(), -1_000_000.0);
    }

    #[test]
    fn test_builder_missing() {
        let err = RatePaymentPeriod::builder()
            .payment_date(date(2014, 10, 6))
            .currency(Currency::GBP)
            .notional(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, TenorError::missing_argument("accrual_periods"));

        let err = RatePaymentPeriod::builder()
            .accrual_period(RateAccrualPeriod::fixed(date(2014, 7, 2), date(2014, 10, 2), 0.25, 0.01))
            .currency(Currency::GBP)
            .notional(1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, TenorError::missing_argument("payment_date"));
    }

    #[test]
    fn test_builder_rejects_inverted_accrual() {
        let result = RatePaymentPeriod::builder()
            .payment_date(date(2014, 10, 6))
            .accrual_period(RateAccrualPeriod::fixed(date(2014, 10, 2), date(2014, 7, 2), 0.25, 0.01))
            .currency(Currency::GBP)
            .notional(1.0)
            .build();
        assert!(matches!(result, Err(TenorError::InvalidDate { .. })));
    }

    #[test]
    fn test_unit_amount() {
        let ap = RateAccrualPeriod::forward(date(2014, 7, 2), date(2014, 10, 2), 0.25, "GBP-LIBOR-3M")
            .with_gearing(2.0)
            .with_spread(0.001);
        assert_relative_eq!(ap.unit_amount(0.01), (2.0 * 0.01 + 0.001) * 0.25);
    }

    #[test]
    fn test_accrual_serde_defaults() {
        let json = r#"{
            "start_date": "2014-07-02",
            "end_date": "2014-10-02",
            "year_fraction": 0.25,
            "rate": { "type": "Forward", "index": "GBP-LIBOR-3M" }
        }"#;
        let ap: RateAccrualPeriod = serde_json::from_str(json).unwrap();
        assert_relative_eq!(ap.gearing, 1.0);
        assert_relative_eq!(ap.spread, 0.0);
        assert_eq!(ap.rate, RateComputation::forward("GBP-LIBOR-3M"));
    }
}
