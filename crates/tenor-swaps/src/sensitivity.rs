//! Point sensitivities to market data.

use serde::{Deserialize, Serialize};

use tenor_core::types::{Currency, Date};

/// Sensitivity of a value to a single point of market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PointSensitivity {
    /// Sensitivity to the continuously compounded zero rate at a date.
    ZeroRate {
        /// Curve currency.
        currency: Currency,
        /// Curve date.
        date: Date,
        /// Value change per unit change of the zero rate.
        sensitivity: f64,
    },
    /// Sensitivity to the forward rate of an index over a period.
    ForwardRate {
        /// Index name.
        index: String,
        /// Forward period start.
        start_date: Date,
        /// Forward period end.
        end_date: Date,
        /// Currency of the sensitivity.
        currency: Currency,
        /// Value change per unit change of the forward rate.
        sensitivity: f64,
    },
}

impl PointSensitivity {
    /// The sensitivity value.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        match self {
            PointSensitivity::ZeroRate { sensitivity, .. }
            | PointSensitivity::ForwardRate { sensitivity, .. } => *sensitivity,
        }
    }

    /// The currency of the sensitivity.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            PointSensitivity::ZeroRate { currency, .. }
            | PointSensitivity::ForwardRate { currency, .. } => *currency,
        }
    }

    /// Returns a copy with the sensitivity multiplied by the factor.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            PointSensitivity::ZeroRate { sensitivity, .. }
            | PointSensitivity::ForwardRate { sensitivity, .. } => *sensitivity *= factor,
        }
        copy
    }
}

/// A list of point sensitivities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSensitivities {
    sensitivities: Vec<PointSensitivity>,
}

impl PointSensitivities {
    /// An empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a list from the given sensitivities.
    #[must_use]
    pub fn of(sensitivities: Vec<PointSensitivity>) -> Self {
        Self { sensitivities }
    }

    /// The sensitivities, in insertion order.
    #[must_use]
    pub fn sensitivities(&self) -> &[PointSensitivity] {
        &self.sensitivities
    }

    /// Number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.sensitivities.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensitivities.is_empty()
    }

    /// Appends the entries of another list.
    #[must_use]
    pub fn combined_with(mut self, other: PointSensitivities) -> Self {
        self.sensitivities.extend(other.sensitivities);
        self
    }

    /// Multiplies every entry by the factor.
    #[must_use]
    pub fn multiplied_by(self, factor: f64) -> Self {
        Self {
            sensitivities: self
                .sensitivities
                .iter()
                .map(|s| s.multiplied_by(factor))
                .collect(),
        }
    }

    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sensitivities.iter().map(PointSensitivity::sensitivity).sum()
    }
}

impl From<PointSensitivity> for PointSensitivities {
    fn from(sensitivity: PointSensitivity) -> Self {
        Self::of(vec![sensitivity])
    }
}

impl FromIterator<PointSensitivity> for PointSensitivities {
    fn from_iter<I: IntoIterator<Item = PointSensitivity>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}
