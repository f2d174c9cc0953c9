//! Domain types shared across Tenor.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: ISO currency codes
//! - [`CurrencyAmount`]: Amount of money in a currency
//! - [`Payment`]: Dated currency amount

mod currency;
mod date;
mod payment;

pub use currency::Currency;
pub use date::Date;
pub use payment::{CurrencyAmount, Payment};
