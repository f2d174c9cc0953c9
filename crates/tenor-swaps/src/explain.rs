//! Explanation of a present value calculation.
//!
//! Pricers append entries to an [`ExplainMapBuilder`] while they compute, and
//! the caller builds the resulting [`ExplainMap`] once pricing is done.

use serde::{Deserialize, Serialize};
use std::fmt;

use tenor_core::types::{Currency, CurrencyAmount, Date};

/// Key of an explain entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExplainKey {
    /// Type of the entry, such as the period type name.
    EntryType,
    /// Position of the entry within a list.
    EntryIndex,
    /// Payment date.
    PaymentDate,
    /// Start date.
    StartDate,
    /// End date.
    EndDate,
    /// Accrual year fraction.
    AccrualYearFraction,
    /// Currency.
    Currency,
    /// Notional.
    Notional,
    /// Fixed rate.
    FixedRate,
    /// Forecast forward rate.
    ForwardRate,
    /// Spread.
    Spread,
    /// Gearing.
    Gearing,
    /// Amount per unit notional.
    UnitAmount,
    /// Forecast value.
    ForecastValue,
    /// Discount factor.
    DiscountFactor,
    /// Present value.
    PresentValue,
    /// Nested accrual periods.
    AccrualPeriods,
}

impl ExplainKey {
    /// Name of the key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ExplainKey::EntryType => "EntryType",
            ExplainKey::EntryIndex => "EntryIndex",
            ExplainKey::PaymentDate => "PaymentDate",
            ExplainKey::StartDate => "StartDate",
            ExplainKey::EndDate => "EndDate",
            ExplainKey::AccrualYearFraction => "AccrualYearFraction",
            ExplainKey::Currency => "Currency",
            ExplainKey::Notional => "Notional",
            ExplainKey::FixedRate => "FixedRate",
            ExplainKey::ForwardRate => "ForwardRate",
            ExplainKey::Spread => "Spread",
            ExplainKey::Gearing => "Gearing",
            ExplainKey::UnitAmount => "UnitAmount",
            ExplainKey::ForecastValue => "ForecastValue",
            ExplainKey::DiscountFactor => "DiscountFactor",
            ExplainKey::PresentValue => "PresentValue",
            ExplainKey::AccrualPeriods => "AccrualPeriods",
        }
    }
}

impl fmt::Display for ExplainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of an explain entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExplainValue {
    /// Free text.
    Text(String),
    /// A date.
    Date(Date),
    /// A number.
    Number(f64),
    /// A currency.
    Currency(Currency),
    /// An amount of money.
    Amount(CurrencyAmount),
    /// Nested maps.
    List(Vec<ExplainMap>),
}

impl From<&str> for ExplainValue {
    fn from(value: &str) -> Self {
        ExplainValue::Text(value.to_string())
    }
}

impl From<String> for ExplainValue {
    fn from(value: String) -> Self {
        ExplainValue::Text(value)
    }
}

impl From<Date> for ExplainValue {
    fn from(value: Date) -> Self {
        ExplainValue::Date(value)
    }
}

impl From<f64> for ExplainValue {
    fn from(value: f64) -> Self {
        ExplainValue::Number(value)
    }
}

impl From<usize> for ExplainValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        ExplainValue::Number(value as f64)
    }
}

impl From<Currency> for ExplainValue {
    fn from(value: Currency) -> Self {
        ExplainValue::Currency(value)
    }
}

impl From<CurrencyAmount> for ExplainValue {
    fn from(value: CurrencyAmount) -> Self {
        ExplainValue::Amount(value)
    }
}

/// An ordered list of explain entries.
///
/// A key may appear more than once; entries keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExplainMap {
    entries: Vec<(ExplainKey, ExplainValue)>,
}

impl ExplainMap {
    /// Returns a builder.
    #[must_use]
    pub fn builder() -> ExplainMapBuilder {
        ExplainMapBuilder::default()
    }

    /// First value under the key.
    #[must_use]
    pub fn get(&self, key: ExplainKey) -> Option<&ExplainValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// First value under the key, if it is a number.
    #[must_use]
    pub fn get_number(&self, key: ExplainKey) -> Option<f64> {
        match self.get(key) {
            Some(ExplainValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Nested maps under the key, empty if absent.
    #[must_use]
    pub fn get_list(&self, key: ExplainKey) -> &[ExplainMap] {
        match self.get(key) {
            Some(ExplainValue::List(list)) => list,
            _ => &[],
        }
    }

    /// All entries in order.
    #[must_use]
    pub fn entries(&self) -> &[(ExplainKey, ExplainValue)] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only builder for an [`ExplainMap`].
#[derive(Debug, Default)]
pub struct ExplainMapBuilder {
    entries: Vec<(ExplainKey, ExplainValue)>,
}

impl ExplainMapBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn put(&mut self, key: ExplainKey, value: impl Into<ExplainValue>) -> &mut Self {
        self.entries.push((key, value.into()));
        self
    }

    /// Appends a nested map to the list under the key, creating the list if needed.
    ///
    /// The closure fills in the nested map.
    pub fn add_list_entry(
        &mut self,
        key: ExplainKey,
        fill: impl FnOnce(&mut ExplainMapBuilder),
    ) -> &mut Self {
        let mut child = ExplainMapBuilder::new();
        fill(&mut child);
        let child = child.build();

        let existing = self.entries.iter_mut().find_map(|(k, v)| match v {
            ExplainValue::List(list) if *k == key => Some(list),
            _ => None,
        });
        match existing {
            Some(list) => list.push(child),
            None => self.entries.push((key, ExplainValue::List(vec![child]))),
        }
        self
    }

    /// Number of entries added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the map.
    #[must_use]
    pub fn build(self) -> ExplainMap {
        ExplainMap {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_keeps_order() {
        let mut builder = ExplainMap::builder();
        builder
            .put(ExplainKey::EntryType, "RatePaymentPeriod")
            .put(ExplainKey::Currency, Currency::GBP)
            .put(ExplainKey::Notional, 1000.0);
        let map = builder.build();

        assert_eq!(map.len(), 3);
        assert_eq!(map.entries()[0].0, ExplainKey::EntryType);
        assert_eq!(map.get(ExplainKey::Currency), Some(&ExplainValue::Currency(Currency::GBP)));
        assert_eq!(map.get_number(ExplainKey::Notional), Some(1000.0));
        assert_eq!(map.get(ExplainKey::Spread), None);
    }

    #[test]
    fn test_list_entries_share_a_list() {
        let mut builder = ExplainMapBuilder::new();
        builder.add_list_entry(ExplainKey::AccrualPeriods, |child| {
            child.put(ExplainKey::EntryIndex, 0usize);
        });
        builder.put(ExplainKey::PresentValue, 1.0);
        builder.add_list_entry(ExplainKey::AccrualPeriods, |child| {
            child.put(ExplainKey::EntryIndex, 1usize);
        });
        let map = builder.build();

        assert_eq!(map.len(), 2);
        let list = map.get_list(ExplainKey::AccrualPeriods);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].get_number(ExplainKey::EntryIndex), Some(1.0));
        assert!(map.get_list(ExplainKey::EntryType).is_empty());
    }
}
