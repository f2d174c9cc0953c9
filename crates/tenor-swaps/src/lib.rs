//! # Tenor Swaps
//!
//! Swap payment periods and the pricers that value them.
//!
//! - **Periods**: `RatePaymentPeriod`, `KnownAmountPaymentPeriod` and custom
//!   shapes, unified as `PaymentPeriod`
//! - **Market data**: the `RatesProvider` trait and a flat-curve implementation
//! - **Pricers**: discounting pricers per period type and the
//!   `DispatchingPaymentPeriodPricer` that routes between them
//! - **Results**: point sensitivities and explain maps
//!
//! ## Example
//!
//! ```rust
//! use tenor_swaps::prelude::*;
//!
//! let period = RatePaymentPeriod::builder()
//!     .payment_date(Date::from_ymd(2014, 10, 6).unwrap())
//!     .accrual_period(RateAccrualPeriod::fixed(
//!         Date::from_ymd(2014, 7, 2).unwrap(),
//!         Date::from_ymd(2014, 10, 2).unwrap(),
//!         0.25,
//!         0.0123,
//!     ))
//!     .currency(Currency::GBP)
//!     .notional(1_000_000.0)
//!     .build()
//!     .unwrap();
//!
//! let provider = SimpleRatesProvider::new(Date::from_ymd(2014, 1, 22).unwrap())
//!     .with_zero_rate(Currency::GBP, 0.0);
//!
//! let pricer = DispatchingPaymentPeriodPricer::standard();
//! let fv = pricer.forecast_value(&PaymentPeriod::Rate(period), &provider).unwrap();
//! assert!((fv - 3075.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod explain;
pub mod periods;
pub mod pricer;
pub mod rates_provider;
pub mod sensitivity;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::explain::{ExplainKey, ExplainMap, ExplainMapBuilder, ExplainValue};
    pub use crate::periods::{
        CustomPaymentPeriod, KnownAmountPaymentPeriod, PaymentPeriod, RateAccrualPeriod,
        RateComputation, RatePaymentPeriod,
    };
    pub use crate::pricer::{
        DiscountingKnownAmountPaymentPeriodPricer, DiscountingRatePaymentPeriodPricer,
        DispatchingPaymentPeriodPricer, PaymentPeriodPricer,
    };
    pub use crate::rates_provider::{RatesProvider, SimpleRatesProvider};
    pub use crate::sensitivity::{PointSensitivities, PointSensitivity};
    pub use tenor_core::prelude::*;
}

pub use periods::PaymentPeriod;
pub use pricer::{DispatchingPaymentPeriodPricer, PaymentPeriodPricer};
