//! Swap payment periods.
//!
//! A [`PaymentPeriod`] is a closed set of the period shapes the pricers know
//! how to value, plus a [`Custom`](PaymentPeriod::Custom) arm for shapes
//! defined outside this crate.

mod known_amount;
mod rate;

pub use known_amount::{KnownAmountPaymentPeriod, KnownAmountPaymentPeriodBuilder};
pub use rate::{RateAccrualPeriod, RateComputation, RatePaymentPeriod, RatePaymentPeriodBuilder};

use std::fmt;
use std::sync::Arc;

use tenor_core::calendars::BusinessDayAdjuster;
use tenor_core::types::{Currency, Date};
use tenor_core::{TenorError, TenorResult};

/// A payment period shape defined outside this crate.
///
/// The standard pricers do not value custom periods; they are carried so that
/// schedules can hold them and report a clear failure when priced.
pub trait CustomPaymentPeriod: fmt::Debug + Send + Sync {
    /// Name of the period type, used in error messages.
    fn type_name(&self) -> &str;

    /// Start of the period.
    fn start_date(&self) -> Date;

    /// End of the period.
    fn end_date(&self) -> Date;

    /// Date of payment.
    fn payment_date(&self) -> Date;

    /// Payment currency.
    fn currency(&self) -> Currency;
}

/// A single payment period of a swap leg.
#[derive(Debug, Clone)]
pub enum PaymentPeriod {
    /// Amount accrued at a rate.
    Rate(RatePaymentPeriod),
    /// Amount known in advance.
    KnownAmount(KnownAmountPaymentPeriod),
    /// Any other period shape.
    Custom(Arc<dyn CustomPaymentPeriod>),
}

impl PaymentPeriod {
    /// Name of the period type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            PaymentPeriod::Rate(_) => "RatePaymentPeriod",
            PaymentPeriod::KnownAmount(_) => "KnownAmountPaymentPeriod",
            PaymentPeriod::Custom(period) => period.type_name(),
        }
    }

    /// Start of the period.
    #[must_use]
    pub fn start_date(&self) -> Date {
        match self {
            PaymentPeriod::Rate(period) => period.start_date(),
            PaymentPeriod::KnownAmount(period) => period.start_date(),
            PaymentPeriod::Custom(period) => period.start_date(),
        }
    }

    /// End of the period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        match self {
            PaymentPeriod::Rate(period) => period.end_date(),
            PaymentPeriod::KnownAmount(period) => period.end_date(),
            PaymentPeriod::Custom(period) => period.end_date(),
        }
    }

    /// Date of payment.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        match self {
            PaymentPeriod::Rate(period) => period.payment_date(),
            PaymentPeriod::KnownAmount(period) => period.payment_date(),
            PaymentPeriod::Custom(period) => period.payment_date(),
        }
    }

    /// Payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            PaymentPeriod::Rate(period) => period.currency(),
            PaymentPeriod::KnownAmount(period) => period.currency(),
            PaymentPeriod::Custom(period) => period.currency(),
        }
    }

    /// Returns a copy with the payment date adjusted to a business day.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::UnsupportedPeriodType` for custom periods.
    pub fn adjust_payment_date(&self, adjuster: &BusinessDayAdjuster) -> TenorResult<Self> {
        match self {
            PaymentPeriod::Rate(period) => Ok(PaymentPeriod::Rate(
                period.with_payment_date(adjuster.adjust(period.payment_date())),
            )),
            PaymentPeriod::KnownAmount(period) => Ok(PaymentPeriod::KnownAmount(
                period.with_payment_date(adjuster.adjust(period.payment_date())),
            )),
            PaymentPeriod::Custom(period) => Err(TenorError::unsupported_period_type(
                "adjust_payment_date",
                period.type_name(),
            )),
        }
    }
}

impl From<RatePaymentPeriod> for PaymentPeriod {
    fn from(period: RatePaymentPeriod) -> Self {
        PaymentPeriod::Rate(period)
    }
}

impl From<KnownAmountPaymentPeriod> for PaymentPeriod {
    fn from(period: KnownAmountPaymentPeriod) -> Self {
        PaymentPeriod::KnownAmount(period)
    }
}

impl From<Arc<dyn CustomPaymentPeriod>> for PaymentPeriod {
    fn from(period: Arc<dyn CustomPaymentPeriod>) -> Self {
        PaymentPeriod::Custom(period)
    }
}
