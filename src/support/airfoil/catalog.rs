//! Built-in NACA section polars.
//!
//! Each standard section is tabulated at the same seven angles of attack,
//! from -10° to 20° in 5° steps.

use super::AirfoilProfile;

/// Identifiers of the built-in NACA sections, in catalog order.
pub const STANDARD_PROFILE_IDS: [&str; 8] = [
    "NACA 2412",
    "NACA 0012",
    "NACA 4412",
    "NACA 2415",
    "NACA 6409",
    "NACA 0015",
    "NACA 23012",
    "NACA 64A010",
];

const ALPHA_DEG: [f64; 7] = [-10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0];

struct StandardSection {
    id: &'static str,
    description: &'static str,
    lift: [f64; 7],
    drag: [f64; 7],
}

const SECTIONS: [StandardSection; 8] = [
    StandardSection {
        id: "NACA 2412",
        description: "Asymmetric profile - good for general applications",
        lift: [-0.6, -0.1, 0.4, 0.9, 1.3, 1.5, 1.2],
        drag: [0.035, 0.012, 0.008, 0.012, 0.035, 0.068, 0.12],
    },
    StandardSection {
        id: "NACA 0012",
        description: "Symmetric profile - ideal for control surfaces",
        lift: [-0.8, -0.4, 0.0, 0.4, 0.8, 1.0, 0.8],
        drag: [0.030, 0.010, 0.006, 0.010, 0.030, 0.065, 0.11],
    },
    StandardSection {
        id: "NACA 4412",
        description: "High lift profile - slow flying applications",
        lift: [-0.4, 0.1, 0.6, 1.1, 1.5, 1.7, 1.4],
        drag: [0.040, 0.014, 0.010, 0.014, 0.040, 0.075, 0.13],
    },
    StandardSection {
        id: "NACA 2415",
        description: "Thicker profile - good stability",
        lift: [-0.5, -0.1, 0.4, 0.8, 1.2, 1.4, 1.1],
        drag: [0.038, 0.013, 0.009, 0.013, 0.038, 0.070, 0.12],
    },
    StandardSection {
        id: "NACA 6409",
        description: "Laminar profile - low drag",
        lift: [-0.3, 0.2, 0.7, 1.2, 1.6, 1.8, 1.5],
        drag: [0.042, 0.015, 0.011, 0.015, 0.042, 0.078, 0.14],
    },
    StandardSection {
        id: "NACA 0015",
        description: "Thicker symmetric profile - durable structures",
        lift: [-0.9, -0.45, 0.0, 0.45, 0.9, 1.1, 0.9],
        drag: [0.045, 0.015, 0.008, 0.015, 0.045, 0.080, 0.15],
    },
    StandardSection {
        id: "NACA 23012",
        description: "Reflex profile - stable without horizontal stabilizer",
        lift: [-0.7, -0.2, 0.3, 0.8, 1.2, 1.4, 1.1],
        drag: [0.038, 0.013, 0.009, 0.013, 0.038, 0.072, 0.13],
    },
    StandardSection {
        id: "NACA 64A010",
        description: "Thin laminar profile - high speeds",
        lift: [-0.6, -0.3, 0.0, 0.3, 0.6, 0.8, 0.6],
        drag: [0.025, 0.008, 0.005, 0.008, 0.025, 0.055, 0.10],
    },
];

/// Returns `true` if `id` names a built-in NACA section.
#[must_use]
pub fn is_standard(id: &str) -> bool {
    STANDARD_PROFILE_IDS.contains(&id)
}

/// Builds the built-in NACA section profiles, in catalog order.
///
/// # Panics
///
/// Panics if a built-in section table violates a profile invariant.
#[must_use]
pub fn standard_profiles() -> Vec<AirfoilProfile> {
    SECTIONS
        .iter()
        .map(|section| {
            AirfoilProfile::from_degrees(
                section.id,
                ALPHA_DEG.to_vec(),
                section.lift.to_vec(),
                section.drag.to_vec(),
            )
            .expect("built-in section tables should be valid")
            .with_description(section.description)
        })
        .collect()
}
