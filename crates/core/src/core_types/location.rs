//! Lagoon site catalog and climate classes
//!
//! Emission intensities are demo-grade constants: Bakersfield is based on
//! EPA digester data, Pullman and Lynden are scaled down to represent
//! colder / milder climates. The catalog is fixed at compile time and never
//! mutated — lookups are deterministic key matches rather than inline
//! conditional chains, so adding a site cannot introduce ordering bugs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse climate regime used to scale sensitivity projections
///
/// A categorical label, distinct from a site's literal geography: the
/// scenario sweep applies every class to the same base intensity to answer
/// "what if this herd experienced each climate regime?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateClass {
    /// Colder inland conditions (slower lagoon activity)
    Cold,
    /// Mild coastal conditions, the reference regime
    Mild,
    /// Warm conditions (faster lagoon activity)
    Warm,
}

impl ClimateClass {
    /// All classes in display order: Cold, Mild, Warm.
    ///
    /// This order is a contract of the table — comparison charts rely on
    /// it, callers must not re-sort.
    pub const ALL: [ClimateClass; 3] = [ClimateClass::Cold, ClimateClass::Mild, ClimateClass::Warm];

    /// Multiplicative sensitivity factor relative to the Mild regime (= 1.0)
    #[inline]
    #[must_use]
    pub const fn sensitivity_multiplier(self) -> f64 {
        match self {
            ClimateClass::Cold => 0.7,
            ClimateClass::Mild => 1.0,
            ClimateClass::Warm => 1.3,
        }
    }

    /// Class label for display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ClimateClass::Cold => "Cold",
            ClimateClass::Mild => "Mild",
            ClimateClass::Warm => "Warm",
        }
    }
}

impl fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-site emission profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationProfile {
    /// Site name as it appears in the catalog
    pub name: String,
    /// Nominal climate class of the site itself
    pub climate: ClimateClass,
    /// Methane intensity, ft³ CH4 per head per day (positive)
    pub ft3_per_head_day: f64,
}

impl LocationProfile {
    /// Pullman, WA — colder inland northwest
    pub fn pullman() -> Self {
        LocationProfile {
            name: "Pullman".to_string(),
            climate: ClimateClass::Cold,
            ft3_per_head_day: 25.0,
        }
    }

    /// Lynden, WA — mild coastal
    pub fn lynden() -> Self {
        LocationProfile {
            name: "Lynden".to_string(),
            climate: ClimateClass::Mild,
            ft3_per_head_day: 30.0,
        }
    }

    /// Bakersfield, CA — warm, EPA digester data
    pub fn bakersfield() -> Self {
        LocationProfile {
            name: "Bakersfield".to_string(),
            climate: ClimateClass::Warm,
            ft3_per_head_day: 37.0,
        }
    }
}

/// Fixed catalog of lagoon sites known to the model
///
/// Initialized from compile-time constants; the set of valid site names is
/// exactly the catalog keys.
pub struct LocationCatalog;

impl LocationCatalog {
    /// All site profiles in catalog order
    #[must_use]
    pub fn all() -> [LocationProfile; 3] {
        [
            LocationProfile::pullman(),
            LocationProfile::lynden(),
            LocationProfile::bakersfield(),
        ]
    }

    /// Canonical site names in catalog order
    #[must_use]
    pub fn names() -> [&'static str; 3] {
        ["Pullman", "Lynden", "Bakersfield"]
    }

    /// Look up a site by name (ASCII case-insensitive)
    ///
    /// Returns `None` for any name outside the fixed catalog.
    #[must_use]
    pub fn get(name: &str) -> Option<LocationProfile> {
        Self::all()
            .into_iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }
}
