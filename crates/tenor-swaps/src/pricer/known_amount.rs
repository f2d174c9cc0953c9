//! Discounting pricer for known amount payment periods.

use tenor_core::TenorResult;

use super::PaymentPeriodPricer;
use crate::explain::{ExplainKey, ExplainMapBuilder};
use crate::periods::KnownAmountPaymentPeriod;
use crate::rates_provider::RatesProvider;
use crate::sensitivity::{PointSensitivities, PointSensitivity};

/// Prices a [`KnownAmountPaymentPeriod`] by discounting the payment.
///
/// The amount does not depend on any rate, so pvbp and accrued interest are
/// zero and the only sensitivity is to discounting.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingKnownAmountPaymentPeriodPricer;

impl DiscountingKnownAmountPaymentPeriodPricer {
    /// The default instance.
    pub const DEFAULT: Self = Self;

    fn is_paid(period: &KnownAmountPaymentPeriod, provider: &dyn RatesProvider) -> bool {
        period.payment_date() < provider.valuation_date()
    }
}

impl PaymentPeriodPricer<KnownAmountPaymentPeriod> for DiscountingKnownAmountPaymentPeriodPricer {
    fn present_value(
        &self,
        period: &KnownAmountPaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        let df = provider.discount_factor(period.currency(), period.payment_date())?;
        Ok(period.amount_f64() * df)
    }

    fn forecast_value(
        &self,
        period: &KnownAmountPaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<f64> {
        if Self::is_paid(period, provider) {
            return Ok(0.0);
        }
        Ok(period.amount_f64())
    }

    fn pvbp(&self, _period: &KnownAmountPaymentPeriod, _provider: &dyn RatesProvider) -> TenorResult<f64> {
        Ok(0.0)
    }

    fn present_value_sensitivity(
        &self,
        period: &KnownAmountPaymentPeriod,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        if Self::is_paid(period, provider) {
            return Ok(PointSensitivities::empty());
        }
        let pv = self.present_value(period, provider)?;
        Ok(PointSensitivity::ZeroRate {
            currency: period.currency(),
            date: period.payment_date(),
            sensitivity: -provider.relative_time(period.payment_date()) * pv,
        }
        .into())
    }

    fn forecast_value_sensitivity(
        &self,
        _period: &KnownAmountPaymentPeriod,
        _provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        Ok(PointSensitivities::empty())
    }

    fn pvbp_sensitivity(
        &self,
        _period: &KnownAmountPaymentPeriod,
        _provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities> {
        Ok(PointSensitivities::empty())
    }

    fn accrued_interest(
        &self,
        _period: &KnownAmountPaymentPeriod,
        _provider: &dyn RatesProvider,
    ) -> TenorResult<f64> {
        Ok(0.0)
    }

    fn explain_present_value(
        &self,
        period: &KnownAmountPaymentPeriod,
        provider: &dyn RatesProvider,
        builder: &mut ExplainMapBuilder,
    ) -> TenorResult<()> {
        let df = if Self::is_paid(period, provider) {
            None
        } else {
            Some(provider.discount_factor(period.currency(), period.payment_date())?)
        };

        builder
            .put(ExplainKey::EntryType, "KnownAmountPaymentPeriod")
            .put(ExplainKey::PaymentDate, period.payment_date())
            .put(ExplainKey::StartDate, period.start_date())
            .put(ExplainKey::EndDate, period.end_date())
            .put(ExplainKey::Currency, period.currency());

        match df {
            Some(df) => builder
                .put(ExplainKey::DiscountFactor, df)
                .put(ExplainKey::ForecastValue, period.amount_f64())
                .put(ExplainKey::PresentValue, period.amount_f64() * df),
            None => builder
                .put(ExplainKey::ForecastValue, 0.0)
                .put(ExplainKey::PresentValue, 0.0),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates_provider::SimpleRatesProvider;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tenor_core::types::{Currency, CurrencyAmount, Date, Payment};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn period() -> KnownAmountPaymentPeriod {
        KnownAmountPaymentPeriod::of(
            Payment::of(CurrencyAmount::of(Currency::GBP, dec!(1000)), date(2015, 8, 21)),
            date(2015, 5, 19),
            date(2015, 8, 19),
        )
        .unwrap()
    }

    fn provider(valuation: Date) -> SimpleRatesProvider {
        SimpleRatesProvider::new(valuation).with_zero_rate(Currency::GBP, 0.01)
    }

    #[test]
    fn test_values() {
        let pricer = DiscountingKnownAmountPaymentPeriodPricer::DEFAULT;
        let provider = provider(date(2015, 1, 1));
        let df = provider.discount_factor(Currency::GBP, date(2015, 8, 21)).unwrap();

        assert_relative_eq!(pricer.forecast_value(&period(), &provider).unwrap(), 1000.0);
        assert_relative_eq!(pricer.present_value(&period(), &provider).unwrap(), 1000.0 * df, epsilon = 1e-9);
        assert_relative_eq!(pricer.pvbp(&period(), &provider).unwrap(), 0.0);
        assert_relative_eq!(pricer.accrued_interest(&period(), &provider).unwrap(), 0.0);
        assert!(pricer.forecast_value_sensitivity(&period(), &provider).unwrap().is_empty());
        assert!(pricer.pvbp_sensitivity(&period(), &provider).unwrap().is_empty());
    }

    #[test]
    fn test_present_value_sensitivity() {
        let pricer = DiscountingKnownAmountPaymentPeriodPricer::DEFAULT;
        let valuation = date(2015, 1, 1);
        let sens = pricer.present_value_sensitivity(&period(), &provider(valuation)).unwrap();
        assert_eq!(sens.size(), 1);

        let shift = 1e-7;
        let up = SimpleRatesProvider::new(valuation).with_zero_rate(Currency::GBP, 0.01 + shift);
        let down = SimpleRatesProvider::new(valuation).with_zero_rate(Currency::GBP, 0.01 - shift);
        let bumped = (pricer.present_value(&period(), &up).unwrap()
            - pricer.present_value(&period(), &down).unwrap())
            / (2.0 * shift);
        assert_relative_eq!(sens.total(), bumped, max_relative = 1e-6);
    }

    #[test]
    fn test_paid() {
        let pricer = DiscountingKnownAmountPaymentPeriodPricer::DEFAULT;
        let provider = provider(date(2015, 8, 22));

        assert_relative_eq!(pricer.present_value(&period(), &provider).unwrap(), 0.0);
        assert_relative_eq!(pricer.forecast_value(&period(), &provider).unwrap(), 0.0);
        assert!(pricer.present_value_sensitivity(&period(), &provider).unwrap().is_empty());

        let mut builder = ExplainMapBuilder::new();
        pricer.explain_present_value(&period(), &provider, &mut builder).unwrap();
        assert_eq!(builder.build().get_number(ExplainKey::PresentValue), Some(0.0));
    }

    #[test]
    fn test_payment_on_valuation_date_is_not_paid() {
        let pricer = DiscountingKnownAmountPaymentPeriodPricer::DEFAULT;
        let provider = provider(date(2015, 8, 21));
        assert_relative_eq!(pricer.present_value(&period(), &provider).unwrap(), 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_failed_explain_writes_nothing() {
        let pricer = DiscountingKnownAmountPaymentPeriodPricer::DEFAULT;
        let no_curves = SimpleRatesProvider::new(date(2015, 1, 1));

        let mut builder = ExplainMapBuilder::new();
        let err = pricer
            .explain_present_value(&period(), &no_curves, &mut builder)
            .unwrap_err();
        assert!(matches!(err, tenor_core::TenorError::UnknownReference { .. }));
        assert!(builder.is_empty());
    }
}
