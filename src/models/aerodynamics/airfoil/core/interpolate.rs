//! Piecewise-linear coefficient lookup.

use uom::si::{angle::radian, f64::Angle};

use crate::support::airfoil::AirfoilProfile;

/// Lift and drag coefficients at one angle of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Lift coefficient (CL).
    pub lift: f64,

    /// Drag coefficient (CD).
    pub drag: f64,
}

/// Interpolates the lift and drag coefficients of `profile` at `angle`.
///
/// Both coefficients are interpolated linearly between the two samples that
/// bracket the angle. Angles at or beyond either end of the table take the
/// end sample's values; the table is never extrapolated.
///
/// `angle` must not be `NaN`. Infinite angles clamp like any other angle
/// outside the table. Use [`interpolate_coefficients`] to validate an
/// unchecked angle.
///
/// [`interpolate_coefficients`]: super::interpolate_coefficients
#[must_use]
pub fn interpolate(profile: &AirfoilProfile, angle: Angle) -> Coefficients {
    let alpha = profile.alpha();
    let lift = profile.lift_coefficients();
    let drag = profile.drag_coefficients();
    let last = alpha.len() - 1;

    let at = |i: usize| Coefficients {
        lift: lift[i],
        drag: drag[i],
    };

    if angle <= alpha[0] {
        return at(0);
    }
    if angle >= alpha[last] {
        return at(last);
    }

    // First sample above `angle`.
    let upper = alpha.partition_point(|&a| a <= angle).clamp(1, last);
    let lower = upper - 1;

    let x = angle.get::<radian>();
    let x0 = alpha[lower].get::<radian>();
    let x1 = alpha[upper].get::<radian>();
    let t = (x - x0) / (x1 - x0);

    Coefficients {
        lift: lerp(lift[lower], lift[upper], t),
        drag: lerp(drag[lower], drag[upper], t),
    }
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}
