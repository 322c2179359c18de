//! Discrete-event simulation of one waiting line served by a pool of
//! cashiers. Two staffing scenarios run under the same seed and the same
//! arrival and service draws, so their wait statistics are directly
//! comparable.

pub mod checkout;
pub mod config;
pub mod discrete_system;
pub mod metrics;
pub mod report;
pub mod scenario;
pub mod simulation;

pub use crate::checkout::record::{CustomerRecord, RunOutcome};
pub use crate::config::{DrawBounds, RunParams, SimulationConfig, ValidationError};
pub use crate::metrics::{Histogram, RunMetrics};
pub use crate::scenario::{run_scenarios, ScenarioComparison, ScenarioResult, Verdict};
pub use crate::simulation::run_simulation;
