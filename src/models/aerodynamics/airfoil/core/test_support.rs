use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, MassDensity, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::support::airfoil::{AirfoilProfile, ProfileRepository};

use super::FlightCondition;

/// Four-sample symmetric section used throughout the core tests.
pub(super) fn naca0012() -> AirfoilProfile {
    AirfoilProfile::from_degrees(
        "NACA0012",
        vec![-5.0, 0.0, 5.0, 10.0],
        vec![-0.5, 0.0, 0.5, 1.0],
        vec![0.05, 0.02, 0.03, 0.07],
    )
    .unwrap()
}

pub(super) fn repository() -> ProfileRepository {
    [naca0012()].into_iter().collect()
}

pub(super) fn condition(alpha_deg: f64, velocity: f64, density: f64, area: f64) -> FlightCondition {
    FlightCondition::new(
        Angle::new::<degree>(alpha_deg),
        Velocity::new::<meter_per_second>(velocity),
        MassDensity::new::<kilogram_per_cubic_meter>(density),
        Area::new::<square_meter>(area),
    )
    .unwrap()
}

pub(super) fn deg(value: f64) -> Angle {
    Angle::new::<degree>(value)
}
