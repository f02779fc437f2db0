//! Tabulated airfoil polars.
//!
//! An [`AirfoilProfile`] is a validated table of angle-of-attack samples with
//! matching lift and drag coefficients. Profiles are owned by a
//! [`ProfileRepository`], which models read from; the [`loader`] module builds
//! profiles from CSV or whitespace-delimited files.
//!
//! The repository can be seeded with the built-in NACA sections via
//! [`ProfileRepository::standard`]:
//!
//! ```
//! use twine_airfoil::support::airfoil::ProfileRepository;
//! use uom::si::angle::degree;
//!
//! let repository = ProfileRepository::standard();
//! assert!(repository.contains("NACA 0012"));
//!
//! let stall = repository.stall_angle("NACA 0012").unwrap();
//! assert_eq!(stall.get::<degree>().round(), 15.0);
//! ```

mod catalog;
pub mod loader;
mod profile;
mod repository;

pub use catalog::{STANDARD_PROFILE_IDS, is_standard, standard_profiles};
pub use profile::{AirfoilProfile, Column, MIN_SAMPLES, ProfileError, ProfileSample};
pub use repository::{ProfileNotFound, ProfileRepository, RemoveError};
