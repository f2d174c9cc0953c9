//! Pricer that dispatches on the payment period type.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tenor_core::{TenorError, TenorResult};

use super::{
    DiscountingKnownAmountPaymentPeriodPricer, DiscountingRatePaymentPeriodPricer,
    PaymentPeriodPricer,
};
use crate::explain::ExplainMapBuilder;
use crate::periods::{
    CustomPaymentPeriod, KnownAmountPaymentPeriod, PaymentPeriod, RatePaymentPeriod,
};
use crate::rates_provider::RatesProvider;
use crate::sensitivity::PointSensitivities;

static STANDARD: OnceLock<DispatchingPaymentPeriodPricer> = OnceLock::new();

/// Prices any [`PaymentPeriod`] by forwarding to the pricer for its type.
///
/// Rate periods go to the rate pricer and known amount periods to the known
/// amount pricer, with arguments and results passed through unchanged.
/// Custom periods fail with `TenorError::UnsupportedPeriodType`.
///
/// # Example
///
/// ```rust
/// use tenor_swaps::prelude::*;
///
/// let pricer = DispatchingPaymentPeriodPricer::standard();
/// let valuation = Date::from_ymd(2015, 1, 1).unwrap();
/// let provider = SimpleRatesProvider::new(valuation).with_zero_rate(Currency::GBP, 0.0);
///
/// let period = KnownAmountPaymentPeriod::of(
///     Payment::of(CurrencyAmount::of(Currency::GBP, 1000), Date::from_ymd(2015, 8, 21).unwrap()),
///     Date::from_ymd(2015, 5, 19).unwrap(),
///     Date::from_ymd(2015, 8, 19).unwrap(),
/// )
/// .unwrap();
///
/// let pv = pricer
///     .present_value(&PaymentPeriod::KnownAmount(period), &provider)
///     .unwrap();
/// assert!((pv - 1000.0).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct DispatchingPaymentPeriodPricer {
    rate_pricer: Arc<dyn PaymentPeriodPricer<RatePaymentPeriod>>,
    known_amount_pricer: Arc<dyn PaymentPeriodPricer<KnownAmountPaymentPeriod>>,
}

impl DispatchingPaymentPeriodPricer {
    /// Creates a pricer from the per-type pricers.
    pub fn new(
        rate_pricer: Arc<dyn PaymentPeriodPricer<RatePaymentPeriod>>,
        known_amount_pricer: Arc<dyn PaymentPeriodPricer<KnownAmountPaymentPeriod>>,
    ) -> Self {
        Self {
            rate_pricer,
            known_amount_pricer,
        }
    }

    /// Shared instance using the discounting pricers.
    pub fn standard() -> &'static Self {
        STANDARD.get_or_init(Self::default)
    }

    /// The rate period pricer.
    #[must_use]
    pub fn rate_pricer(&self) -> &dyn PaymentPeriodPricer<RatePaymentPeriod> {
        self.rate_pricer.as_ref()
    }

    /// The known amount period pricer.
    #[must_use]
    pub fn known_amount_pricer(&self) -> &dyn PaymentPeriodPricer<KnownAmountPaymentPeriod> {
        self.known_amount_pricer.as_ref()
    }

    fn unsupported(operation: &str, period: &dyn CustomPaymentPeriod) -> TenorError {
        tracing::warn!(
            operation,
            period_type = period.type_name(),
            "no pricer for payment period type"
        );
        TenorError::unsupported_period_type(operation, period.type_name())
    }
}

impl Default for DispatchingPaymentPeriodPricer {
    fn default() -> Self {
        Self::new(
            Arc::new(DiscountingRatePaymentPeriodPricer::DEFAULT),
            Arc::new(DiscountingKnownAmountPaymentPeriodPricer::DEFAULT),
        )
    }
}

impl fmt::Debug for DispatchingPaymentPeriodPricer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchingPaymentPeriodPricer").finish_non_exhaustive()
    }
}

impl PaymentPeriodPricer<PaymentPeriod> for DispatchingPaymentPeriodPricer {
    fn present_value(&self, period: &PaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.present_value(p, provider),
            PaymentPeriod::KnownAmount(p) => self.known_amount_pricer.present_value(p, provider),
            PaymentPeriod::Custom(p) => Err(Self::unsupported("present_value", p.as_ref())),
        }
    }

    fn forecast_value(&self, period: &PaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.forecast_value(p, provider),
            PaymentPeriod::KnownAmount(p) => self.known_amount_pricer.forecast_value(p, provider),
            PaymentPeriod::Custom(p) => Err(Self::unsupported("forecast_value", p.as_ref())),
        }
    }

    fn pvbp(&self, period: &PaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.pvbp(p, provider),
            PaymentPeriod::KnownAmount(p) => self.known_amount_pricer.pvbp(p, provider),
            PaymentPeriod::Custom(p) => Err(Self::unsupported("pvbp", p.as_ref())),
        }
    }

    fn present_value_sensitivity(
        &self,
        period: &PaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.present_value_sensitivity(p, provider),
            PaymentPeriod::KnownAmount(p) => {
                self.known_amount_pricer.present_value_sensitivity(p, provider)
            }
            PaymentPeriod::Custom(p) => {
                Err(Self::unsupported("present_value_sensitivity", p.as_ref()))
            }
        }
    }

    fn forecast_value_sensitivity(
        &self,
        period: &PaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.forecast_value_sensitivity(p, provider),
            PaymentPeriod::KnownAmount(p) => {
                self.known_amount_pricer.forecast_value_sensitivity(p, provider)
            }
            PaymentPeriod::Custom(p) => {
                Err(Self::unsupported("forecast_value_sensitivity", p.as_ref()))
            }
        }
    }

    fn pvbp_sensitivity(
        &self,
        period: &PaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.pvbp_sensitivity(p, provider),
            PaymentPeriod::KnownAmount(p) => self.known_amount_pricer.pvbp_sensitivity(p, provider),
            PaymentPeriod::Custom(p) => Err(Self::unsupported("pvbp_sensitivity", p.as_ref())),
        }
    }

    fn accrued_interest(&self, period: &PaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.accrued_interest(p, provider),
            PaymentPeriod::KnownAmount(p) => self.known_amount_pricer.accrued_interest(p, provider),
            PaymentPeriod::Custom(p) => Err(Self::unsupported("accrued_interest", p.as_ref())),
        }
    }

    fn explain_present_value(
        &self,
        period: &PaymentPeriod,
        provider: &dyn RatesProvider,
        builder: &mut ExplainMapBuilder,
    ) -> TenorResult<()> {
        match period {
            PaymentPeriod::Rate(p) => self.rate_pricer.explain_present_value(p, provider, builder),
            PaymentPeriod::KnownAmount(p) => {
                self.known_amount_pricer.explain_present_value(p, provider, builder)
            }
            PaymentPeriod::Custom(p) => {
                Err(Self::unsupported("explain_present_value", p.as_ref()))
            }
        }
    }
}
