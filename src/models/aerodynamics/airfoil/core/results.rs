use uom::si::f64::{Angle, Area, Force, MassDensity, Pressure, Velocity};

use super::{Coefficients, EfficiencyMetrics, EfficiencyRatio};

/// Outcome of analyzing one profile at one flight condition.
///
/// The result is a plain value owned by the caller; it holds no reference to
/// the profile it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Identifier of the analyzed profile.
    pub profile_id: String,

    pub angle_of_attack: Angle,

    /// Interpolated lift coefficient (CL).
    pub lift_coefficient: f64,

    /// Interpolated drag coefficient (CD).
    pub drag_coefficient: f64,

    /// Dynamic pressure `½ ρ V²`.
    pub dynamic_pressure: Pressure,

    pub lift: Force,
    pub drag: Force,

    /// Lift force over drag force.
    pub lift_to_drag: EfficiencyRatio,

    /// Chord-based Reynolds number.
    pub reynolds_number: f64,

    pub velocity: Velocity,
    pub density: MassDensity,
    pub area: Area,
}

impl AnalysisResult {
    /// The interpolated coefficient pair.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            lift: self.lift_coefficient,
            drag: self.drag_coefficient,
        }
    }

    /// Derives the efficiency metrics of this result.
    #[must_use]
    pub fn efficiency_metrics(&self) -> EfficiencyMetrics {
        EfficiencyMetrics::from_result(self)
    }
}
