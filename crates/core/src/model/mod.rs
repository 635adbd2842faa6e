//! The emission estimation model
//!
//! Three collaborating pure functions: [`predict`] produces the headline
//! methane volume, [`project`] sweeps it across climate regimes for
//! sensitivity display, and [`derive_metrics`] converts a volume into
//! energy and car-equivalence figures. All are referentially transparent
//! over their arguments and the static catalogs.

pub mod derived;
pub mod predictor;
pub mod scenario;

pub use derived::{derive_metrics, DerivedMetrics};
pub use predictor::{predict, predict_named};
pub use scenario::{project, project_named, ScenarioResult};
