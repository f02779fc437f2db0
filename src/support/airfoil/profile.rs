use std::fmt;

use thiserror::Error;
use uom::si::{angle::degree, f64::Angle};

use crate::support::constraint::{Finite, NonNegative};

/// Minimum number of samples in a profile table.
pub const MIN_SAMPLES: usize = 3;

/// Identifies one column of a profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Angle of attack.
    Alpha,
    /// Lift coefficient.
    Lift,
    /// Drag coefficient.
    Drag,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alpha => "angle of attack",
            Self::Lift => "lift coefficient",
            Self::Drag => "drag coefficient",
        })
    }
}

/// Errors raised when a profile table is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The profile identifier is empty.
    #[error("profile id must not be empty")]
    EmptyId,

    /// The three columns have different lengths.
    #[error(
        "column lengths differ: {alpha} angles, {lift} lift coefficients, {drag} drag coefficients"
    )]
    LengthMismatch {
        alpha: usize,
        lift: usize,
        drag: usize,
    },

    /// The table has fewer than [`MIN_SAMPLES`] rows.
    #[error("profile needs at least {min} samples, found {found}")]
    TooFewSamples { found: usize, min: usize },

    /// A sample is infinite or `NaN`.
    #[error("{column} sample {index} is not finite")]
    NotFinite { column: Column, index: usize },

    /// An angle sample is not greater than the one before it.
    #[error("angle of attack samples must be strictly ascending (sample {index})")]
    NotAscending { index: usize },

    /// A drag coefficient sample is negative.
    #[error("drag coefficient sample {index} is negative")]
    NegativeDrag { index: usize },
}

/// One row of a profile table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub alpha: Angle,
    pub lift: f64,
    pub drag: f64,
}

/// A validated table of lift and drag coefficients against angle of attack.
///
/// Invariants established by [`AirfoilProfile::new`]:
///
/// - all three columns have the same length, at least [`MIN_SAMPLES`];
/// - every sample is finite;
/// - angle samples are strictly ascending;
/// - drag coefficients are non-negative.
///
/// Profiles are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilProfile {
    id: String,
    description: Option<String>,
    alpha: Vec<Angle>,
    lift: Vec<f64>,
    drag: Vec<f64>,
}

impl AirfoilProfile {
    /// Builds a profile from angle samples and aligned coefficient samples.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if any table invariant is violated.
    pub fn new(
        id: impl Into<String>,
        alpha: Vec<Angle>,
        lift: Vec<f64>,
        drag: Vec<f64>,
    ) -> Result<Self, ProfileError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProfileError::EmptyId);
        }

        if alpha.len() != lift.len() || alpha.len() != drag.len() {
            return Err(ProfileError::LengthMismatch {
                alpha: alpha.len(),
                lift: lift.len(),
                drag: drag.len(),
            });
        }

        if alpha.len() < MIN_SAMPLES {
            return Err(ProfileError::TooFewSamples {
                found: alpha.len(),
                min: MIN_SAMPLES,
            });
        }

        check_finite(Column::Alpha, alpha.iter().map(|a| a.get::<degree>()))?;
        check_finite(Column::Lift, lift.iter().copied())?;
        check_finite(Column::Drag, drag.iter().copied())?;

        if let Some(index) = alpha
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
            .map(|i| i + 1)
        {
            return Err(ProfileError::NotAscending { index });
        }

        if let Some(index) = drag.iter().position(|&cd| NonNegative::new(cd).is_err()) {
            return Err(ProfileError::NegativeDrag { index });
        }

        Ok(Self {
            id,
            description: None,
            alpha,
            lift,
            drag,
        })
    }

    /// Builds a profile from angle samples given in degrees.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if any table invariant is violated.
    pub fn from_degrees(
        id: impl Into<String>,
        alpha_deg: Vec<f64>,
        lift: Vec<f64>,
        drag: Vec<f64>,
    ) -> Result<Self, ProfileError> {
        let alpha = alpha_deg.into_iter().map(Angle::new::<degree>).collect();
        Self::new(id, alpha, lift, drag)
    }

    /// Attaches a human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Renames the profile.
    pub(crate) fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of samples in the table.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.alpha.len()
    }

    /// Angle-of-attack samples, strictly ascending.
    #[must_use]
    pub fn alpha(&self) -> &[Angle] {
        &self.alpha
    }

    /// Lift coefficient samples, aligned with [`alpha`](Self::alpha).
    #[must_use]
    pub fn lift_coefficients(&self) -> &[f64] {
        &self.lift
    }

    /// Drag coefficient samples, aligned with [`alpha`](Self::alpha).
    #[must_use]
    pub fn drag_coefficients(&self) -> &[f64] {
        &self.drag
    }

    /// Iterates over the table rows in ascending angle order.
    pub fn samples(&self) -> impl Iterator<Item = ProfileSample> + '_ {
        self.alpha
            .iter()
            .zip(&self.lift)
            .zip(&self.drag)
            .map(|((&alpha, &lift), &drag)| ProfileSample { alpha, lift, drag })
    }

    /// Smallest and largest tabulated angles.
    #[must_use]
    pub fn angle_range(&self) -> (Angle, Angle) {
        // At least MIN_SAMPLES rows exist by construction.
        (self.alpha[0], self.alpha[self.alpha.len() - 1])
    }

    /// Angle of the sample with the largest lift coefficient.
    ///
    /// When several samples share the maximum, the lowest angle wins.
    #[must_use]
    pub fn stall_angle(&self) -> Angle {
        let mut best = 0;
        for (i, &cl) in self.lift.iter().enumerate().skip(1) {
            if cl > self.lift[best] {
                best = i;
            }
        }
        self.alpha[best]
    }
}

fn check_finite(column: Column, values: impl Iterator<Item = f64>) -> Result<(), ProfileError> {
    for (index, value) in values.enumerate() {
        if Finite::new(value).is_err() {
            return Err(ProfileError::NotFinite { column, index });
        }
    }
    Ok(())
}
