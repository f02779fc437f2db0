use std::{cmp::Ordering, fmt};

/// An efficiency ratio whose denominator may be zero.
///
/// Lift-to-drag and the other efficiency metrics divide by a drag quantity
/// that is never negative. A zero denominator yields [`Unbounded`] rather
/// than an error; consumers decide how to present it.
///
/// [`Unbounded`]: EfficiencyRatio::Unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EfficiencyRatio {
    /// A finite quotient; never `NaN` or infinite.
    Finite(f64),
    /// The denominator is zero, or small enough that the quotient overflows.
    Unbounded,
}

impl EfficiencyRatio {
    /// Divides `numerator` by a non-negative `denominator`.
    ///
    /// Returns [`EfficiencyRatio::Unbounded`] unless the denominator is
    /// strictly positive and the quotient is finite. The numerator is
    /// expected to be finite.
    #[must_use]
    pub fn from_quotient(numerator: f64, denominator: f64) -> Self {
        let quotient = numerator / denominator;
        if denominator > 0.0 && quotient.is_finite() {
            Self::Finite(quotient)
        } else {
            Self::Unbounded
        }
    }

    /// Returns the ratio as a float, mapping [`Unbounded`](Self::Unbounded)
    /// to positive infinity.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Finite(value) => value,
            Self::Unbounded => f64::INFINITY,
        }
    }

    /// Returns the ratio if it is finite.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unbounded => None,
        }
    }

    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self == Self::Unbounded
    }

    /// Total ordering in which [`Unbounded`](Self::Unbounded) ranks above
    /// every finite value.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl fmt::Display for EfficiencyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => fmt::Display::fmt(value, f),
            Self::Unbounded => f.pad("inf"),
        }
    }
}
