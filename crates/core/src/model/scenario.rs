//! Climate sensitivity sweep
//!
//! Answers "what would methane output be if this herd, at this site's base
//! intensity, experienced each climate regime?" — a local sensitivity sweep
//! around the site's baseline rate, not a prediction for a different site.

use crate::core_types::{ClimateClass, CubicFeet, HerdSize, Horizon, LocationCatalog, LocationProfile};
use crate::error::ModelError;
use tracing::debug;

/// One predicted volume per climate class, in the fixed order Cold, Mild, Warm
///
/// Always contains all three classes regardless of the site's own assigned
/// class. The ordering is a contract of [`ClimateClass::ALL`]; callers must
/// not re-sort it, so comparison charts stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioResult {
    entries: [(ClimateClass, CubicFeet); 3],
}

impl ScenarioResult {
    /// Predicted volume for one climate class
    #[must_use]
    pub fn get(&self, class: ClimateClass) -> CubicFeet {
        // ALL covers every class, so the find cannot miss
        self.entries
            .iter()
            .find(|(entry_class, _)| *entry_class == class)
            .map_or(CubicFeet::ZERO, |(_, volume)| *volume)
    }

    /// All entries in display order
    #[must_use]
    pub fn entries(&self) -> &[(ClimateClass, CubicFeet); 3] {
        &self.entries
    }

    /// Iterate entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (ClimateClass, CubicFeet)> + '_ {
        self.entries.iter().copied()
    }
}

/// Project methane volume across every climate regime
///
/// Uses the base site's intensity as the baseline daily rate but ignores its
/// assigned climate class; each [`ClimateClass`] multiplier is applied to the
/// same baseline. The Mild entry therefore equals the plain prediction for
/// the site's own rate.
#[must_use]
pub fn project(herd: HerdSize, location: &LocationProfile, horizon: Horizon) -> ScenarioResult {
    let entries = ClimateClass::ALL.map(|class| {
        let daily = location.ft3_per_head_day * class.sensitivity_multiplier() * herd.as_f64();
        (class, CubicFeet::new(daily * f64::from(horizon.day_count())))
    });
    ScenarioResult { entries }
}

/// Project from unvalidated site name and horizon token
///
/// # Errors
/// Mirrors [`predict_named`](crate::model::predict_named): unknown site
/// names and unrecognized horizon tokens fail fast with typed errors.
pub fn project_named(
    herd: HerdSize,
    location: &str,
    horizon: &str,
) -> Result<ScenarioResult, ModelError> {
    let profile = LocationCatalog::get(location).ok_or_else(|| ModelError::UnknownLocation {
        name: location.to_string(),
    })?;
    let horizon: Horizon = horizon.parse()?;

    let result = project(herd, &profile, horizon);
    debug!(
        herd = herd.count(),
        location = %profile.name,
        horizon = %horizon,
        "climate scenario sweep"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::predictor::predict;

    #[test]
    fn test_sweep_order_is_cold_mild_warm() {
        let result = project(
            HerdSize::new(1000),
            &LocationProfile::lynden(),
            Horizon::Day,
        );
        let order: Vec<ClimateClass> = result.iter().map(|(class, _)| class).collect();
        assert_eq!(
            order,
            [ClimateClass::Cold, ClimateClass::Mild, ClimateClass::Warm]
        );
    }

    #[test]
    fn test_lynden_daily_sweep_values() {
        // 1000 head at 30 ft³/head/day: 0.7/1.0/1.3 of 30000
        let result = project(
            HerdSize::new(1000),
            &LocationProfile::lynden(),
            Horizon::Day,
        );
        assert_eq!(result.get(ClimateClass::Cold).value(), 21_000.0);
        assert_eq!(result.get(ClimateClass::Mild).value(), 30_000.0);
        assert_eq!(result.get(ClimateClass::Warm).value(), 39_000.0);
    }

    #[test]
    fn test_mild_entry_equals_base_prediction() {
        for site in LocationCatalog::all() {
            for horizon in Horizon::ALL {
                let herd = HerdSize::new(2000);
                let swept = project(herd, &site, horizon).get(ClimateClass::Mild);
                let predicted = predict(herd, &site, horizon);
                assert_eq!(
                    swept, predicted,
                    "Mild sweep must match base prediction for {}",
                    site.name
                );
            }
        }
    }

    #[test]
    fn test_sweep_ignores_site_assigned_class() {
        // Bakersfield is Warm, but its sweep baseline is still its own
        // intensity with the Mild multiplier — not a shifted curve.
        let herd = HerdSize::new(500);
        let result = project(herd, &LocationProfile::bakersfield(), Horizon::Day);
        assert_eq!(
            result.get(ClimateClass::Mild).value(),
            37.0 * 500.0,
            "baseline must be the site's own rate at multiplier 1.0"
        );
    }

    #[test]
    fn test_named_sweep_validation() {
        assert!(project_named(HerdSize::new(1000), "Lynden", "month").is_ok());
        assert_eq!(
            project_named(HerdSize::new(1000), "Mars", "day").unwrap_err(),
            ModelError::UnknownLocation {
                name: "Mars".to_string()
            }
        );
        assert_eq!(
            project_named(HerdSize::new(1000), "Lynden", "week").unwrap_err(),
            ModelError::InvalidHorizon {
                token: "week".to_string()
            }
        );
    }
}
