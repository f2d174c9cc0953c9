//! Payment period pricers.
//!
//! [`PaymentPeriodPricer`] is implemented once per period shape. The
//! [`DispatchingPaymentPeriodPricer`] prices any [`PaymentPeriod`](crate::periods::PaymentPeriod)
//! by forwarding to the pricer for its shape.

mod dispatching;
mod known_amount;
mod rate;

pub use dispatching::DispatchingPaymentPeriodPricer;
pub use known_amount::DiscountingKnownAmountPaymentPeriodPricer;
pub use rate::DiscountingRatePaymentPeriodPricer;

use tenor_core::TenorResult;

use crate::explain::ExplainMapBuilder;
use crate::rates_provider::RatesProvider;
use crate::sensitivity::PointSensitivities;

/// Prices a payment period of type `P`.
///
/// Every operation reads market data from the [`RatesProvider`] as of its
/// valuation date. Values are in the currency of the period.
pub trait PaymentPeriodPricer<P>: Send + Sync {
    /// Present value of the period.
    fn present_value(&self, period: &P, provider: &dyn RatesProvider) -> TenorResult<f64>;

    /// Undiscounted value of the period.
    fn forecast_value(&self, period: &P, provider: &dyn RatesProvider) -> TenorResult<f64>;

    /// Present value of a unit change in the period rate.
    fn pvbp(&self, period: &P, provider: &dyn RatesProvider) -> TenorResult<f64>;

    /// Sensitivity of the present value to the market data.
    fn present_value_sensitivity(
        &self,
        period: &P,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities>;

    /// Sensitivity of the forecast value to the market data.
    fn forecast_value_sensitivity(
        &self,
        period: &P,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities>;

    /// Sensitivity of the pvbp to the market data.
    fn pvbp_sensitivity(
        &self,
        period: &P,
        provider: &dyn RatesProvider,
    ) -> TenorResult<PointSensitivities>;

    /// Interest accrued from the start of the period to the valuation date.
    fn accrued_interest(&self, period: &P, provider: &dyn RatesProvider) -> TenorResult<f64>;

    /// Writes the steps of the present value calculation into the builder.
    fn explain_present_value(
        &self,
        period: &P,
        provider: &dyn RatesProvider,
        builder: &mut ExplainMapBuilder,
    ) -> TenorResult<()>;
}
