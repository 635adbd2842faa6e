//! Semantic unit types for type-safe quantity handling
//!
//! Newtype wrappers keep methane volume, energy, and CO2-equivalent mass
//! from being mixed accidentally (e.g. feeding a kWh figure into a
//! car-equivalence division that expects kilograms).
//!
//! # Design
//! - All physical quantities use f64
//! - Total ordering via Ord trait (`total_cmp`, NaN greater than all values)
//! - Private inner fields with validated constructors
//! - Serde support for serialization

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};

/// Methane volume in cubic feet (ft³ CH4 equivalent).
///
/// The model's headline output unit. Always non-negative: every prediction
/// is a product of non-negative factors, and the constructor enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CubicFeet(f64);

impl Eq for CubicFeet {}

impl PartialOrd for CubicFeet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CubicFeet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl CubicFeet {
    /// Zero volume
    pub const ZERO: CubicFeet = CubicFeet(0.0);

    /// Create a new volume. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "CubicFeet::new: volume cannot be negative");
        CubicFeet(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Add for CubicFeet {
    type Output = CubicFeet;
    #[inline]
    fn add(self, rhs: CubicFeet) -> CubicFeet {
        CubicFeet(self.0 + rhs.0)
    }
}

impl Mul<f64> for CubicFeet {
    type Output = CubicFeet;
    #[inline]
    fn mul(self, rhs: f64) -> CubicFeet {
        CubicFeet(self.0 * rhs)
    }
}

impl fmt::Display for CubicFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ft³", self.0)
    }
}

/// Electrical energy in kilowatt-hours
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilowattHours(f64);

impl Eq for KilowattHours {}

impl PartialOrd for KilowattHours {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilowattHours {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl KilowattHours {
    /// Create a new energy amount. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "KilowattHours::new: energy cannot be negative");
        KilowattHours(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for KilowattHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kWh", self.0)
    }
}

/// CO2-equivalent mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilogramsCo2(f64);

impl Eq for KilogramsCo2 {}

impl PartialOrd for KilogramsCo2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KilogramsCo2 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl KilogramsCo2 {
    /// Create a new CO2-equivalent mass. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "KilogramsCo2::new: mass cannot be negative");
        KilogramsCo2(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for KilogramsCo2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kg CO2-eq", self.0)
    }
}

/// Annualized passenger-car emission equivalents
///
/// The number of average passenger cars whose yearly CO2 output matches the
/// given emission. Always expressed per-year regardless of the reporting
/// horizon upstream, so figures stay comparable across horizons.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CarYears(f64);

impl Eq for CarYears {}

impl PartialOrd for CarYears {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CarYears {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl CarYears {
    /// Create a new car-equivalence figure. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "CarYears::new: equivalence cannot be negative");
        CarYears(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for CarYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} car-equivalents", self.0)
    }
}

/// Number of cattle contributing to lagoon methane generation
///
/// Must be positive: a zero herd would silently defeat the monotonicity
/// guarantees of the model. Presentation layers bound the value further
/// (the demo uses 100-20000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct HerdSize(u32);

impl HerdSize {
    /// Create a new herd size. Asserts value > 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: u32) -> Self {
        assert!(
            value > 0,
            "HerdSize::new: herd must contain at least one animal"
        );
        HerdSize(value)
    }

    /// Get the head count
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0
    }

    /// Convert to f64 for emission arithmetic
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for HerdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} head", self.0)
    }
}
