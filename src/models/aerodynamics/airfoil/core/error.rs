use std::fmt;

use thiserror::Error;

use crate::support::{airfoil::ProfileNotFound, constraint::ConstraintError};

/// Flight-condition inputs that are validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    AngleOfAttack,
    Velocity,
    Density,
    Area,
    Chord,
    KinematicViscosity,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AngleOfAttack => "angle of attack",
            Self::Velocity => "airspeed",
            Self::Density => "air density",
            Self::Area => "reference area",
            Self::Chord => "chord length",
            Self::KinematicViscosity => "kinematic viscosity",
        })
    }
}

/// Quantities derived from a flight condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived {
    DynamicPressure,
    Lift,
    Drag,
    ReynoldsNumber,
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DynamicPressure => "dynamic pressure",
            Self::Lift => "lift force",
            Self::Drag => "drag force",
            Self::ReynoldsNumber => "Reynolds number",
        })
    }
}

/// Errors that can occur during an airfoil analysis.
///
/// Every failure is a deterministic input or lookup problem; none is worth
/// retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The requested profile is not in the repository.
    #[error(transparent)]
    ProfileNotFound(#[from] ProfileNotFound),

    /// A flight-condition input violates its constraint.
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    /// A derived quantity overflowed for finite inputs.
    #[error("{quantity} is not finite for this flight condition")]
    Overflow { quantity: Derived },
}

impl AnalysisError {
    pub(super) fn invalid(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}
