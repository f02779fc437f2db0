//! # Twine Airfoil
//!
//! Airfoil lift and drag models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Coefficients are read from tabulated airfoil polars (angle of attack, lift
//! coefficient, drag coefficient), interpolated at the requested angle, and
//! turned into forces with the standard dynamic-pressure equations.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations and the
//!   analysis operations behind them.
//! - [`support`]: Supporting utilities used by models (profile tables, the
//!   profile repository and loader, numeric constraints, unit extensions).
//!
//! ## Example
//!
//! ```
//! use twine_airfoil::models::aerodynamics::airfoil::{FlightCondition, analyze_airfoil};
//! use twine_airfoil::support::airfoil::ProfileRepository;
//! use uom::si::{
//!     angle::degree,
//!     area::square_meter,
//!     f64::{Angle, Area, MassDensity, Velocity},
//!     force::newton,
//!     mass_density::kilogram_per_cubic_meter,
//!     velocity::meter_per_second,
//! };
//!
//! let repository = ProfileRepository::standard();
//! let condition = FlightCondition::new(
//!     Angle::new::<degree>(5.0),
//!     Velocity::new::<meter_per_second>(25.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(1.225),
//!     Area::new::<square_meter>(12.0),
//! )
//! .unwrap();
//!
//! let result = analyze_airfoil(&repository, "NACA 2412", &condition).unwrap();
//! assert!(result.lift.get::<newton>() > 0.0);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Model-specific code lives in each model's internal `core` module and is
//! exposed only through the model's re-exports.

pub mod models;
pub mod support;
