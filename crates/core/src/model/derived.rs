//! Secondary metrics derived from a predicted methane volume
//!
//! Rough demo-grade conversion factors. Bakersfield-calibrated intensities
//! upstream mean these figures are order-of-magnitude comparisons, not
//! engineering estimates.

use crate::core_types::{CarYears, CubicFeet, Horizon, KilogramsCo2, KilowattHours};

/// kWh of electricity per ft³ CH4 (very approximate)
pub const ENERGY_KWH_PER_FT3: f64 = 0.1;

/// kg CO2-equivalent per ft³ CH4 (approx)
pub const CO2_KG_PER_FT3: f64 = 0.52;

/// kg CO2 emitted by one passenger car per year (EPA-style)
pub const CAR_CO2_KG_PER_YEAR: f64 = 4600.0;

/// Energy, CO2, and car-equivalence figures for one prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DerivedMetrics {
    /// Electricity that could be generated from the methane
    pub energy: KilowattHours,
    /// CO2-equivalent mass of the methane over the reporting horizon
    pub co2: KilogramsCo2,
    /// Annualized passenger-car equivalents
    pub car_years: CarYears,
}

/// Convert a methane volume into derived metrics
///
/// Energy and CO2 scale the horizon-total volume directly. The car figure is
/// annualized first so it reads the same regardless of the reporting horizon
/// chosen upstream: a Year volume divides directly by the per-car constant,
/// a Month volume is scaled by 12 and a Day volume by 365 before dividing.
///
/// The annualization multiplies a figure that already totals the full
/// horizon, so a Month figure lands on a 360-day year (30 × 12) while Day
/// and Year land on 365. This matches the long-standing display behavior
/// and is kept as-is rather than silently changing published numbers.
#[must_use]
pub fn derive_metrics(volume: CubicFeet, horizon: Horizon) -> DerivedMetrics {
    let energy = KilowattHours::new(volume.value() * ENERGY_KWH_PER_FT3);
    let co2 = KilogramsCo2::new(volume.value() * CO2_KG_PER_FT3);

    let annual_scale = match horizon {
        Horizon::Year => 1.0,
        Horizon::Month => 12.0,
        Horizon::Day => 365.0,
    };
    let car_years = CarYears::new(co2.value() * annual_scale / CAR_CO2_KG_PER_YEAR);

    DerivedMetrics {
        energy,
        co2,
        car_years,
    }
}
