//! Dynamic pressure, aerodynamic forces and Reynolds number.

use uom::si::{
    f64::{Area, Force, Length, MassDensity, Pressure, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::{constraint::Finite, units::KinematicViscosity};

use super::{
    AnalysisError, AnalysisResult, Coefficients, Derived, EfficiencyRatio, FlightCondition,
};

/// Lift and drag forces on the reference area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerodynamicForces {
    pub lift: Force,
    pub drag: Force,
}

/// Dynamic pressure `q = ½ ρ V²`.
#[must_use]
pub fn dynamic_pressure(density: MassDensity, velocity: Velocity) -> Pressure {
    density * velocity * velocity * 0.5
}

/// Lift and drag forces `C q S`.
#[must_use]
pub fn aerodynamic_forces(
    coefficients: Coefficients,
    dynamic_pressure: Pressure,
    area: Area,
) -> AerodynamicForces {
    let reference: Force = dynamic_pressure * area;
    AerodynamicForces {
        lift: reference * coefficients.lift,
        drag: reference * coefficients.drag,
    }
}

/// Reynolds number `V c / ν`.
#[must_use]
pub fn reynolds_number(velocity: Velocity, chord: Length, nu: KinematicViscosity) -> f64 {
    let re: Ratio = velocity * chord / nu;
    re.get::<ratio>()
}

/// Derives forces and metrics for interpolated `coefficients` at `condition`.
///
/// Fails with [`AnalysisError::Overflow`] if a derived quantity is not finite.
pub(super) fn analyze(
    profile_id: &str,
    condition: &FlightCondition,
    coefficients: Coefficients,
) -> Result<AnalysisResult, AnalysisError> {
    let q = dynamic_pressure(condition.density(), condition.velocity());
    check_finite(q.value, Derived::DynamicPressure)?;

    let AerodynamicForces { lift, drag } = aerodynamic_forces(coefficients, q, condition.area());
    check_finite(lift.value, Derived::Lift)?;
    check_finite(drag.value, Derived::Drag)?;

    let re = reynolds_number(
        condition.velocity(),
        condition.chord(),
        condition.kinematic_viscosity(),
    );
    check_finite(re, Derived::ReynoldsNumber)?;

    Ok(AnalysisResult {
        profile_id: profile_id.to_owned(),
        angle_of_attack: condition.angle_of_attack(),
        lift_coefficient: coefficients.lift,
        drag_coefficient: coefficients.drag,
        dynamic_pressure: q,
        lift,
        drag,
        lift_to_drag: EfficiencyRatio::from_quotient(lift.value, drag.value),
        reynolds_number: re,
        velocity: condition.velocity(),
        density: condition.density(),
        area: condition.area(),
    })
}

fn check_finite(value: f64, quantity: Derived) -> Result<(), AnalysisError> {
    Finite::new(value)
        .map(|_| ())
        .map_err(|_| AnalysisError::Overflow { quantity })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, force::newton, length::meter,
        mass_density::kilogram_per_cubic_meter, pressure::pascal, velocity::meter_per_second,
    };

    use crate::models::aerodynamics::airfoil::core::test_support::condition;
    use crate::support::units::kinematic_viscosity;

    fn speed(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    #[test]
    fn dynamic_pressure_at_thirty_meters_per_second() {
        let q = dynamic_pressure(MassDensity::new::<kilogram_per_cubic_meter>(1.2), speed(30.0));
        assert_relative_eq!(q.get::<pascal>(), 540.0, epsilon = 1e-9);
    }

    #[test]
    fn forces_from_coefficients() {
        let forces = aerodynamic_forces(
            Coefficients {
                lift: 0.5,
                drag: 0.02,
            },
            Pressure::new::<pascal>(540.0),
            Area::new::<square_meter>(10.0),
        );

        assert_relative_eq!(forces.lift.get::<newton>(), 270.0, epsilon = 1e-9);
        assert_relative_eq!(forces.drag.get::<newton>(), 10.8, epsilon = 1e-9);
    }

    #[test]
    fn analysis_of_reference_case() {
        let result = analyze(
            "TEST",
            &condition(3.0, 30.0, 1.2, 10.0),
            Coefficients {
                lift: 0.5,
                drag: 0.02,
            },
        )
        .unwrap();

        assert_eq!(result.profile_id, "TEST");
        assert_relative_eq!(result.dynamic_pressure.get::<pascal>(), 540.0, epsilon = 1e-9);
        assert_relative_eq!(result.lift.get::<newton>(), 270.0, epsilon = 1e-9);
        assert_relative_eq!(result.drag.get::<newton>(), 10.8, epsilon = 1e-9);
        assert_relative_eq!(result.lift_to_drag.value(), 25.0, epsilon = 1e-9);
        assert_relative_eq!(result.reynolds_number, 30.0 / 1.48e-5, max_relative = 1e-12);
        assert_relative_eq!(result.velocity.get::<meter_per_second>(), 30.0);
        assert_relative_eq!(result.area.get::<square_meter>(), 10.0);
    }

    #[test]
    fn zero_drag_gives_unbounded_lift_to_drag() {
        let result = analyze(
            "TEST",
            &condition(0.0, 30.0, 1.2, 10.0),
            Coefficients {
                lift: 0.4,
                drag: 0.0,
            },
        )
        .unwrap();

        assert_eq!(result.drag.get::<newton>(), 0.0);
        assert!(result.lift_to_drag.is_unbounded());
        assert_eq!(result.lift_to_drag.value(), f64::INFINITY);
    }

    #[test]
    fn overflowing_dynamic_pressure_is_an_error() {
        let err = analyze(
            "TEST",
            &condition(3.0, 1e200, 1.2, 10.0),
            Coefficients {
                lift: 0.5,
                drag: 0.02,
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            AnalysisError::Overflow {
                quantity: Derived::DynamicPressure
            }
        );
        assert_eq!(
            err.to_string(),
            "dynamic pressure is not finite for this flight condition"
        );
    }

    #[test]
    fn overflowing_force_is_an_error() {
        // q = 6e303 Pa is finite, q S is not.
        let err = analyze(
            "TEST",
            &condition(3.0, 1e152, 1.2, 1e10),
            Coefficients {
                lift: 0.5,
                drag: 0.02,
            },
        )
        .unwrap_err();

        assert_eq!(
            err,
            AnalysisError::Overflow {
                quantity: Derived::Lift
            }
        );
    }

    #[test]
    fn reynolds_number_scaling() {
        let chord = Length::new::<meter>(1.0);
        let nu = kinematic_viscosity(1.5e-5);
        let base = reynolds_number(speed(20.0), chord, nu);

        assert_relative_eq!(
            reynolds_number(speed(40.0), chord, nu),
            2.0 * base,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            reynolds_number(speed(20.0), Length::new::<meter>(3.0), nu),
            3.0 * base,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            reynolds_number(speed(20.0), chord, kinematic_viscosity(3.0e-5)),
            0.5 * base,
            max_relative = 1e-12
        );
    }
}
