//! Payment periods with a known amount.

use serde::{Deserialize, Serialize};

use tenor_core::types::{Currency, Date, Payment};
use tenor_core::{TenorError, TenorResult};

/// A payment period whose amount is known in advance.
///
/// The accrual dates are kept for schedule purposes; the amount does not
/// depend on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownAmountPaymentPeriod {
    payment: Payment,
    start_date: Date,
    end_date: Date,
}

impl KnownAmountPaymentPeriod {
    /// Creates a period.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidDate` if the end date is before the start date.
    pub fn of(payment: Payment, start_date: Date, end_date: Date) -> TenorResult<Self> {
        if end_date < start_date {
            return Err(TenorError::invalid_date(format!(
                "period ends {end_date} before it starts {start_date}"
            )));
        }
        Ok(Self {
            payment,
            start_date,
            end_date,
        })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> KnownAmountPaymentPeriodBuilder {
        KnownAmountPaymentPeriodBuilder::default()
    }

    /// The payment.
    #[must_use]
    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    /// The start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// The end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// The payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment.date
    }

    /// The payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.payment.currency()
    }

    /// The payment amount as a float.
    #[must_use]
    pub fn amount_f64(&self) -> f64 {
        self.payment.value.amount_f64()
    }

    /// Returns a copy paying on a different date.
    #[must_use]
    pub fn with_payment_date(&self, date: Date) -> Self {
        Self {
            payment: self.payment.with_date(date),
            ..self.clone()
        }
    }
}

/// Builder for [`KnownAmountPaymentPeriod`].
#[derive(Debug, Clone, Default)]
pub struct KnownAmountPaymentPeriodBuilder {
    payment: Option<Payment>,
    start_date: Option<Date>,
    end_date: Option<Date>,
}

impl KnownAmountPaymentPeriodBuilder {
    /// Sets the payment.
    #[must_use]
    pub fn payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Builds the period.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::MissingArgument` if a field is absent and
    /// `TenorError::InvalidDate` if the dates are inverted.
    pub fn build(self) -> TenorResult<KnownAmountPaymentPeriod> {
        let payment = self
            .payment
            .ok_or_else(|| TenorError::missing_argument("payment"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| TenorError::missing_argument("start_date"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| TenorError::missing_argument("end_date"))?;
        KnownAmountPaymentPeriod::of(payment, start_date, end_date)
    }
}
