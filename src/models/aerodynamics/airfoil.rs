//! Airfoil lift and drag model.
//!
//! [`AirfoilModel`] is the [`twine_core::Model`] implementation for one
//! profile in a [`ProfileRepository`]. The analysis functions it delegates to
//! are re-exported here for callers that work with profile ids directly.

mod core;

use twine_core::Model;

use crate::support::airfoil::ProfileRepository;

pub use self::core::{
    AIR_KINEMATIC_VISCOSITY, AerodynamicForces, AnalysisError, AnalysisResult, Coefficients,
    DEFAULT_CHORD, Derived, EfficiencyMetrics, EfficiencyRatio, FlightCondition, Parameter,
    ProfileComparison, Sweep, aerodynamic_forces, analyze_airfoil, compare_profiles,
    dynamic_pressure, interpolate, interpolate_coefficients, reynolds_number, stall_angle, sweep,
};

/// Analyzes a fixed profile at the flight condition it is called with.
///
/// The profile is looked up on every call, so edits to the repository are
/// picked up by later calls.
#[derive(Debug, Clone, Copy)]
pub struct AirfoilModel<'a> {
    repository: &'a ProfileRepository,
    profile_id: &'a str,
}

impl<'a> AirfoilModel<'a> {
    #[must_use]
    pub fn new(repository: &'a ProfileRepository, profile_id: &'a str) -> Self {
        Self {
            repository,
            profile_id,
        }
    }

    #[must_use]
    pub fn profile_id(&self) -> &str {
        self.profile_id
    }
}

impl Model for AirfoilModel<'_> {
    type Input = FlightCondition;
    type Output = AnalysisResult;
    type Error = AnalysisError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        analyze_airfoil(self.repository, self.profile_id, input)
    }
}
