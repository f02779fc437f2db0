//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., airspeed, density, force).
//! This module provides quantities that are useful for airfoil modeling but
//! aren't named in [`uom`].
//!
//! ## Kinematic viscosity
//!
//! [`KinematicViscosity`] is an area per unit time (m²/s in SI). Build one from
//! a plain SI value with [`kinematic_viscosity`]:
//!
//! ```
//! use twine_airfoil::support::units::{kinematic_viscosity, square_meters_per_second};
//!
//! let nu = kinematic_viscosity(1.48e-5);
//! assert_eq!(square_meters_per_second(nu), 1.48e-5);
//! ```

mod quantities;

pub use quantities::{KinematicViscosity, kinematic_viscosity, square_meters_per_second};
