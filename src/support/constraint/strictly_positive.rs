use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Airspeed, air density, reference area, chord and kinematic viscosity all
/// carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_airfoil::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(1.2).unwrap();
/// assert_eq!(x.into_inner(), 1.2);
///
/// let y = StrictlyPositive::new(30.0).unwrap();
/// assert_eq!(y.into_inner(), 30.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter,
        f64::{Area, MassDensity, Velocity},
        mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn airspeeds() {
        let v = Velocity::new::<meter_per_second>(30.0);
        assert!(StrictlyPositive::new(v).is_ok());

        let v = Velocity::new::<meter_per_second>(0.0);
        assert!(StrictlyPositive::new(v).is_err());

        let v = Velocity::new::<meter_per_second>(-3.0);
        assert!(StrictlyPositive::new(v).is_err());
    }

    #[test]
    fn densities_and_areas() {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(1.225);
        assert_eq!(
            StrictlyPositive::new(rho).unwrap().as_ref().get::<kilogram_per_cubic_meter>(),
            1.225
        );

        let area = Area::new::<square_meter>(0.0);
        assert!(StrictlyPositive::new(area).is_err());
    }
}
