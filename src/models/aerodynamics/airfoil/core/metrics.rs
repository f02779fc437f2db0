//! Efficiency figures derived from a completed analysis.

use super::{AnalysisResult, Coefficients, EfficiencyRatio};

/// Efficiency figures of merit for one analysis.
///
/// Every ratio is [`EfficiencyRatio::Unbounded`] when the drag coefficient is
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyMetrics {
    /// Lift force over drag force.
    pub glide_ratio: EfficiencyRatio,

    /// `CL / CD`.
    pub lift_to_drag_coefficient: EfficiencyRatio,

    /// `CL^1.5 / CD`, the endurance figure of merit.
    ///
    /// A negative lift coefficient yields a negative value.
    pub drag_efficiency: EfficiencyRatio,

    /// `CL^3 / CD^2`, the minimum-power figure of merit.
    pub power_factor: EfficiencyRatio,
}

impl EfficiencyMetrics {
    /// Computes the metrics of a completed analysis.
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            glide_ratio: result.lift_to_drag,
            ..Self::from_coefficients(result.coefficients())
        }
    }

    /// Computes the metrics from a coefficient pair alone.
    ///
    /// The glide ratio equals `CL / CD` because both forces share the same
    /// dynamic pressure and area.
    #[must_use]
    pub fn from_coefficients(Coefficients { lift, drag }: Coefficients) -> Self {
        let cl_to_cd = EfficiencyRatio::from_quotient(lift, drag);
        Self {
            glide_ratio: cl_to_cd,
            lift_to_drag_coefficient: cl_to_cd,
            drag_efficiency: EfficiencyRatio::from_quotient(
                lift.signum() * lift.abs().powf(1.5),
                drag,
            ),
            power_factor: EfficiencyRatio::from_quotient(lift.powi(3), drag * drag),
        }
    }
}
