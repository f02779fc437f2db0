use uom::si::{
    angle::degree,
    f64::{Angle, Area, Length, MassDensity, Velocity},
    length::meter,
};

use crate::support::{
    constraint::{Finite, StrictlyPositive},
    units::{KinematicViscosity, kinematic_viscosity},
};

use super::{AnalysisError, Parameter};

/// Default chord length, in meters.
pub const DEFAULT_CHORD: f64 = 1.0;

/// Kinematic viscosity of air near 20 °C, in m²/s.
pub const AIR_KINEMATIC_VISCOSITY: f64 = 1.48e-5;

/// Validated flight parameters for a single analysis.
///
/// Airspeed, density, area, chord and kinematic viscosity are strictly
/// positive and finite; the angle of attack is any finite angle. Angles outside a
/// profile's table are clamped during interpolation, so no range is imposed.
///
/// Chord and viscosity default to [`DEFAULT_CHORD`] and
/// [`AIR_KINEMATIC_VISCOSITY`]; they only affect the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightCondition {
    angle_of_attack: Angle,
    velocity: Velocity,
    density: MassDensity,
    area: Area,
    chord: Length,
    kinematic_viscosity: KinematicViscosity,
}

impl FlightCondition {
    /// Constructs a validated flight condition with default chord and viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] if the angle is not finite
    /// or if velocity, density or area is not strictly positive and finite.
    pub fn new(
        angle_of_attack: Angle,
        velocity: Velocity,
        density: MassDensity,
        area: Area,
    ) -> Result<Self, AnalysisError> {
        let velocity = check_positive(velocity, velocity.value, Parameter::Velocity)?;
        let density = check_positive(density, density.value, Parameter::Density)?;
        let area = check_positive(area, area.value, Parameter::Area)?;

        Ok(Self {
            angle_of_attack: check_angle(angle_of_attack)?,
            velocity,
            density,
            area,
            chord: Length::new::<meter>(DEFAULT_CHORD),
            kinematic_viscosity: kinematic_viscosity(AIR_KINEMATIC_VISCOSITY),
        })
    }

    /// Replaces the chord length.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] if `chord` is not strictly positive and finite.
    pub fn with_chord(self, chord: Length) -> Result<Self, AnalysisError> {
        Ok(Self {
            chord: check_positive(chord, chord.value, Parameter::Chord)?,
            ..self
        })
    }

    /// Replaces the kinematic viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] if `nu` is not strictly positive and finite.
    pub fn with_kinematic_viscosity(self, nu: KinematicViscosity) -> Result<Self, AnalysisError> {
        Ok(Self {
            kinematic_viscosity: check_positive(nu, nu.value, Parameter::KinematicViscosity)?,
            ..self
        })
    }

    /// Returns the same condition at a different angle of attack.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidParameter`] if `angle` is not finite.
    pub fn at_angle(self, angle: Angle) -> Result<Self, AnalysisError> {
        Ok(Self {
            angle_of_attack: check_angle(angle)?,
            ..self
        })
    }

    #[must_use]
    pub fn angle_of_attack(&self) -> Angle {
        self.angle_of_attack
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    #[must_use]
    pub fn chord(&self) -> Length {
        self.chord
    }

    #[must_use]
    pub fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.kinematic_viscosity
    }
}

/// Rejects values that are not strictly positive or not finite.
///
/// `si` is the quantity's value in base SI units.
fn check_positive<T>(value: T, si: f64, parameter: Parameter) -> Result<T, AnalysisError> {
    StrictlyPositive::new(si)
        .and_then(|_| Finite::new(si))
        .map(|_| value)
        .map_err(AnalysisError::invalid(parameter))
}

/// Rejects angles that are infinite or `NaN`.
pub(super) fn check_angle(angle: Angle) -> Result<Angle, AnalysisError> {
    Finite::new(angle.get::<degree>())
        .map(|_| angle)
        .map_err(AnalysisError::invalid(Parameter::AngleOfAttack))
}
