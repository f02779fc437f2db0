//! Supporting utilities for airfoil models.
//!
//! These modules are public because they're useful outside the models, but
//! their APIs may change between releases.

pub mod airfoil;
pub mod constraint;
pub mod units;
