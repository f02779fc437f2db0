//! Angle-of-attack sweeps and side-by-side profile comparison.

use uom::si::f64::Angle;

use crate::support::airfoil::{AirfoilProfile, ProfileRepository};

use super::{AnalysisError, AnalysisResult, FlightCondition, forces, interpolate};

/// Results of analyzing one profile over a range of angles.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub profile_id: String,

    /// One result per swept angle, in the order the angles were given.
    pub results: Vec<AnalysisResult>,
}

impl Sweep {
    /// The result with the highest lift-to-drag ratio.
    ///
    /// An unbounded ratio ranks above every finite one. The earliest result
    /// wins ties. Returns `None` for an empty sweep.
    #[must_use]
    pub fn best_lift_to_drag(&self) -> Option<&AnalysisResult> {
        self.results.iter().reduce(|best, candidate| {
            if candidate.lift_to_drag.total_cmp(&best.lift_to_drag).is_gt() {
                candidate
            } else {
                best
            }
        })
    }
}

/// Two profiles swept over the same angles.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileComparison {
    pub first: Sweep,
    pub second: Sweep,
}

/// Analyzes one profile at each of `angles`.
///
/// All parameters except the angle of attack are taken from `condition`.
///
/// # Errors
///
/// Returns [`AnalysisError::ProfileNotFound`] if the profile is absent,
/// [`AnalysisError::InvalidParameter`] if any angle is not finite, or
/// [`AnalysisError::Overflow`] if a derived quantity overflows.
pub fn sweep(
    repository: &ProfileRepository,
    profile_id: &str,
    condition: &FlightCondition,
    angles: impl IntoIterator<Item = Angle>,
) -> Result<Sweep, AnalysisError> {
    let profile = repository.get(profile_id)?;
    sweep_profile(&profile, condition, angles)
}

/// Sweeps two profiles over the first profile's tabulated angles.
///
/// # Errors
///
/// Returns [`AnalysisError::ProfileNotFound`] if either profile is absent, or
/// [`AnalysisError::Overflow`] if a derived quantity overflows.
pub fn compare_profiles(
    repository: &ProfileRepository,
    first: &str,
    second: &str,
    condition: &FlightCondition,
) -> Result<ProfileComparison, AnalysisError> {
    let first = repository.get(first)?;
    let second = repository.get(second)?;
    let angles = first.alpha();

    Ok(ProfileComparison {
        first: sweep_profile(&first, condition, angles.iter().copied())?,
        second: sweep_profile(&second, condition, angles.iter().copied())?,
    })
}

fn sweep_profile(
    profile: &AirfoilProfile,
    condition: &FlightCondition,
    angles: impl IntoIterator<Item = Angle>,
) -> Result<Sweep, AnalysisError> {
    let results = angles
        .into_iter()
        .map(|angle| {
            let condition = condition.at_angle(angle)?;
            let coefficients = interpolate(profile, angle);
            forces::analyze(profile.id(), &condition, coefficients)
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    Ok(Sweep {
        profile_id: profile.id().to_owned(),
        results,
    })
}
