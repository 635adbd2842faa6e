//! Lagoon Methane Estimation Core Library
//!
//! A deterministic parametric model estimating methane output from a dairy
//! lagoon given herd size, site location, and a reporting horizon, plus the
//! secondary metrics shown alongside it (energy equivalent, car-equivalent
//! CO2) and a climate-sensitivity sweep.
//!
//! Everything here is a pure function over its arguments and two immutable
//! static catalogs (site intensities and climate multipliers): no I/O, no
//! shared mutable state, no suspension points. Concurrent use needs no
//! locking. Presentation layers (chart rendering, widget wiring) live in
//! separate frontend crates and call in through [`model`].
//!
//! ```
//! use lagoon_sim_core::{derive_metrics, predict_named, HerdSize, Horizon};
//!
//! let volume = predict_named(HerdSize::new(1000), "Lynden", "day").unwrap();
//! assert_eq!(volume.value(), 30_000.0);
//!
//! let metrics = derive_metrics(volume, Horizon::Day);
//! assert_eq!(metrics.energy.value(), 3_000.0);
//! ```

// Core value types and catalogs
pub mod core_types;

// Boundary errors
pub mod error;

// The estimation model itself
pub mod model;

// Re-export core types
pub use core_types::{CarYears, ClimateClass, CubicFeet, HerdSize, Horizon, KilogramsCo2,
    KilowattHours, LocationCatalog, LocationProfile};

// Re-export model surface
pub use error::ModelError;
pub use model::{derive_metrics, predict, predict_named, project, project_named, DerivedMetrics,
    ScenarioResult};
