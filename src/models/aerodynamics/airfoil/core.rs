//! Profile-agnostic airfoil analysis.
//!
//! Coefficients are interpolated from a profile table and combined with a
//! [`FlightCondition`] to yield forces and efficiency metrics. Every function
//! here is pure; the [`ProfileRepository`] is only read.

mod condition;
mod error;
mod forces;
mod interpolate;
mod metrics;
mod ratio;
mod results;
mod sweep;

#[cfg(test)]
mod test_support;

use uom::si::f64::Angle;

use crate::support::airfoil::ProfileRepository;

pub use condition::{AIR_KINEMATIC_VISCOSITY, DEFAULT_CHORD, FlightCondition};
pub use error::{AnalysisError, Derived, Parameter};
pub use forces::{AerodynamicForces, aerodynamic_forces, dynamic_pressure, reynolds_number};
pub use interpolate::{Coefficients, interpolate};
pub use metrics::EfficiencyMetrics;
pub use ratio::EfficiencyRatio;
pub use results::AnalysisResult;
pub use sweep::{ProfileComparison, Sweep, compare_profiles, sweep};

/// Analyzes the profile `profile_id` at `condition`.
///
/// # Errors
///
/// Returns [`AnalysisError::ProfileNotFound`] if the profile is not in the
/// repository, or [`AnalysisError::Overflow`] if a force or the Reynolds
/// number is too large to represent.
pub fn analyze_airfoil(
    repository: &ProfileRepository,
    profile_id: &str,
    condition: &FlightCondition,
) -> Result<AnalysisResult, AnalysisError> {
    let profile = repository.get(profile_id)?;
    let coefficients = interpolate(&profile, condition.angle_of_attack());
    forces::analyze(profile.id(), condition, coefficients)
}

/// Interpolates the coefficients of the profile `profile_id` at `angle`.
///
/// # Errors
///
/// Returns [`AnalysisError::ProfileNotFound`] if the profile is absent, or
/// [`AnalysisError::InvalidParameter`] if `angle` is not finite.
pub fn interpolate_coefficients(
    repository: &ProfileRepository,
    profile_id: &str,
    angle: Angle,
) -> Result<Coefficients, AnalysisError> {
    let profile = repository.get(profile_id)?;
    let angle = condition::check_angle(angle)?;
    Ok(interpolate(&profile, angle))
}

/// Angle of the maximum-lift sample of `profile_id`, or `None` if absent.
#[must_use]
pub fn stall_angle(repository: &ProfileRepository, profile_id: &str) -> Option<Angle> {
    repository.stall_angle(profile_id)
}
