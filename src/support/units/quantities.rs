use uom::{
    si::{ISQ, Quantity, SI, area::square_meter, f64::Area, f64::Time, time::second},
    typenum::{N1, P2, Z0},
};

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`KinematicViscosity`] from a value in m²/s.
#[must_use]
pub fn kinematic_viscosity(value: f64) -> KinematicViscosity {
    Area::new::<square_meter>(value) / Time::new::<second>(1.0)
}

/// Returns the value of a [`KinematicViscosity`] in m²/s.
#[must_use]
pub fn square_meters_per_second(nu: KinematicViscosity) -> f64 {
    nu.value
}
