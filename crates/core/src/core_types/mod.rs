//! Core value types shared across the emission model

pub mod horizon;
pub mod location;
pub mod units;

pub use horizon::Horizon;
pub use location::{ClimateClass, LocationCatalog, LocationProfile};
pub use units::{CarYears, CubicFeet, HerdSize, KilogramsCo2, KilowattHours};
