//! Aerodynamics models.
//!
//! This module contains models for two-dimensional airfoil sections.

pub mod airfoil;
