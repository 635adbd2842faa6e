//! Headline methane prediction
//!
//! Deterministic parametric model: per-head daily intensity scaled by herd
//! size and the horizon day count. No rounding is applied internally;
//! presentation may round for display.

use crate::core_types::{CubicFeet, HerdSize, Horizon, LocationCatalog, LocationProfile};
use crate::error::ModelError;
use tracing::debug;

/// Predict total methane volume for one site and reporting horizon
///
/// `daily = intensity(location) * herd`, `result = daily * day_count(horizon)`.
/// Pure and idempotent: identical inputs always yield bit-identical output.
#[must_use]
pub fn predict(herd: HerdSize, location: &LocationProfile, horizon: Horizon) -> CubicFeet {
    let daily = location.ft3_per_head_day * herd.as_f64();
    CubicFeet::new(daily * f64::from(horizon.day_count()))
}

/// Predict from unvalidated site name and horizon token
///
/// The string boundary called by presentation layers. Fails fast with a
/// typed error when the site is outside the fixed catalog or the horizon
/// token is unrecognized.
///
/// # Errors
/// - [`ModelError::UnknownLocation`] if `location` is not a catalog key
/// - [`ModelError::InvalidHorizon`] if `horizon` is not `day`/`month`/`year`
pub fn predict_named(
    herd: HerdSize,
    location: &str,
    horizon: &str,
) -> Result<CubicFeet, ModelError> {
    let profile = LocationCatalog::get(location).ok_or_else(|| ModelError::UnknownLocation {
        name: location.to_string(),
    })?;
    let horizon: Horizon = horizon.parse()?;

    let volume = predict(herd, &profile, horizon);
    debug!(
        herd = herd.count(),
        location = %profile.name,
        horizon = %horizon,
        volume_ft3 = volume.value(),
        "methane prediction"
    );
    Ok(volume)
}
