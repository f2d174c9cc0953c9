//! Discounting pricer for rate payment periods.

use tenor_core::TenorResult;

use super::PaymentPeriodPricer;
use crate::explain::{ExplainKey, ExplainMapBuilder};
use crate::periods::{RateAccrualPeriod, RateComputation, RatePaymentPeriod};
use crate::rates_provider::RatesProvider;
use crate::sensitivity::{PointSensitivities, PointSensitivity};

/// Prices a [`RatePaymentPeriod`] by discounting its forecast amount.
///
/// The forecast value is `notional * sum((gearing * rate + spread) * year_fraction)`
/// and the present value discounts it from the payment date. A period paid
/// before the valuation date has no value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingRatePaymentPeriodPricer;

impl DiscountingRatePaymentPeriodPricer {
    /// The default instance.
    pub const DEFAULT: Self = Self;

    fn is_paid(period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> bool {
        period.payment_date() < provider.valuation_date()
    }

    fn rate(accrual: &RateAccrualPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        match &accrual.rate {
            RateComputation::Fixed { rate } => Ok(*rate),
            RateComputation::Forward { index } => {
                provider.forward_rate(index, accrual.start_date, accrual.end_date)
            }
        }
    }

    fn unit_amount(accrual: &RateAccrualPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        Ok(accrual.unit_amount(Self::rate(accrual, provider)?))
    }

    fn discount_factor(period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        provider.discount_factor(period.currency(), period.payment_date())
    }

    fn zero_rate_sensitivity(
        period: &RatePaymentPeriod,
        provider: &dyn RatesProvider,
        value: f64,
    ) -> PointSensitivity {
        PointSensitivity::ZeroRate {
            currency: period.currency(),
            date: period.payment_date(),
            sensitivity: -provider.relative_time(period.payment_date()) * value,
        }
    }

    /// Fraction of the accrual period elapsed at the valuation date, in `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    fn elapsed_fraction(accrual: &RateAccrualPeriod, provider: &dyn RatesProvider) -> f64 {
        let valuation = provider.valuation_date();
        if valuation <= accrual.start_date {
            return 0.0;
        }
        if valuation >= accrual.end_date {
            return 1.0;
        }
        let elapsed = accrual.start_date.days_between(&valuation) as f64;
        let total = accrual.start_date.days_between(&accrual.end_date) as f64;
        elapsed / total
    }
}

impl PaymentPeriodPricer<RatePaymentPeriod> for DiscountingRatePaymentPeriodPricer {
    fn present_value(&self, period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        let forecast = self.forecast_value(period, provider)?;
        Ok(forecast * Self::discount_factor(period, provider)?)
    }

    fn forecast_value(&self, period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for accrual in period.accrual_periods() {
            total += Self::unit_amount(accrual, provider)?;
        }
        Ok(period.notional() * total)
    }

    fn pvbp(&self, period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        let year_fraction: f64 = period.accrual_periods().iter().map(|ap| ap.year_fraction).sum();
        Ok(period.notional() * year_fraction * Self::discount_factor(period, provider)?)
    }

    fn present_value_sensitivity(
        &self,
        period: &RatePaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        if Self::is_paid(period, provider) {
            return Ok(PointSensitivities::empty());
        }
        let df = Self::discount_factor(period, provider)?;
        let forecast = self.forecast_value(period, provider)?;
        let forward = self.forecast_value_sensitivity(period, provider)?.multiplied_by(df);
        let discounting = Self::zero_rate_sensitivity(period, provider, forecast * df);
        Ok(forward.combined_with(discounting.into()))
    }

    fn forecast_value_sensitivity(
        &self,
        period: &RatePaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        if Self::is_paid(period, provider) {
            return Ok(PointSensitivities::empty());
        }
        Ok(period
            .accrual_periods()
            .iter()
            .filter_map(|accrual| match &accrual.rate {
                RateComputation::Fixed { .. } => None,
                RateComputation::Forward { index } => Some(PointSensitivity::ForwardRate {
                    index: index.clone(),
                    start_date: accrual.start_date,
                    end_date: accrual.end_date,
                    currency: period.currency(),
                    sensitivity: period.notional() * accrual.gearing * accrual.year_fraction,
                }),
            })
            .collect())
    }

    fn pvbp_sensitivity(
        &self,
        period: &RatePaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        if Self::is_paid(period, provider) {
            return Ok(PointSensitivities::empty());
        }
        let pvbp = self.pvbp(period, provider)?;
        Ok(Self::zero_rate_sensitivity(period, provider, pvbp).into())
    }

    fn accrued_interest(&self, period: &RatePaymentPeriod, provider: &dyn RatesProvider) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for accrual in period.accrual_periods() {
            let fraction = Self::elapsed_fraction(accrual, provider);
            if fraction > 0.0 {
                total += fraction * Self::unit_amount(accrual, provider)?;
            }
        }
        Ok(period.notional() * total)
    }

    fn explain_present_value(
        &self,
        period: &RatePaymentPeriod,
        provider: &dyn RatesProvider,
        builder: &mut ExplainMapBuilder,
    ) -> TenorResult<()> {
        // All lookups happen before the first entry is written.
        let paid = Self::is_paid(period, provider);
        let rates = period
            .accrual_periods()
            .iter()
            .map(|accrual| match Self::rate(accrual, provider) {
                Ok(rate) => Ok(Some(rate)),
                Err(_) if paid => Ok(None),
                Err(err) => Err(err),
            })
            .collect::<TenorResult<Vec<_>>>()?;
        let valuation = if paid {
            None
        } else {
            let df = Self::discount_factor(period, provider)?;
            let forecast = period.notional()
                * period
                    .accrual_periods()
                    .iter()
                    .zip(&rates)
                    .map(|(accrual, rate)| rate.map_or(0.0, |r| accrual.unit_amount(r)))
                    .sum::<f64>();
            tracing::trace!(
                payment_date = %period.payment_date(),
                forecast,
                df,
                "explained rate payment period"
            );
            Some((df, forecast))
        };

        builder
            .put(ExplainKey::EntryType, "RatePaymentPeriod")
            .put(ExplainKey::PaymentDate, period.payment_date())
            .put(ExplainKey::StartDate, period.start_date())
            .put(ExplainKey::EndDate, period.end_date())
            .put(ExplainKey::Currency, period.currency())
            .put(ExplainKey::Notional, period.notional());

        for (index, (accrual, rate)) in period.accrual_periods().iter().zip(rates).enumerate() {
            builder.add_list_entry(ExplainKey::AccrualPeriods, |child| {
                child
                    .put(ExplainKey::EntryIndex, index)
                    .put(ExplainKey::StartDate, accrual.start_date)
                    .put(ExplainKey::EndDate, accrual.end_date)
                    .put(ExplainKey::AccrualYearFraction, accrual.year_fraction);
                if let Some(rate) = rate {
                    match accrual.rate {
                        RateComputation::Fixed { .. } => child.put(ExplainKey::FixedRate, rate),
                        RateComputation::Forward { .. } => child.put(ExplainKey::ForwardRate, rate),
                    };
                }
                child
                    .put(ExplainKey::Spread, accrual.spread)
                    .put(ExplainKey::Gearing, accrual.gearing);
                if let Some(rate) = rate {
                    child.put(ExplainKey::UnitAmount, accrual.unit_amount(rate));
                }
            });
        }

        match valuation {
            Some((df, forecast)) => builder
                .put(ExplainKey::DiscountFactor, df)
                .put(ExplainKey::ForecastValue, forecast)
                .put(ExplainKey::PresentValue, forecast * df),
            None => builder
                .put(ExplainKey::ForecastValue, 0.0)
                .put(ExplainKey::PresentValue, 0.0),
        };
        Ok(())
    }
}
