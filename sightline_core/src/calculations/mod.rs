//! # Sightline Calculations
//!
//! Calculations follow the pattern:
//!
//! - [`Configuration`](crate::config::Configuration) - validated input parameters
//! - [`Row`](crate::model::Row) - one computed tier (JSON-serializable)
//! - `calculate(config) -> Result<Vec<Row>, CalcError>` - pure calculation function
//!
//! Most callers want [`SightlineModel::new`](crate::model::SightlineModel::new),
//! which runs the calculation and keeps the configuration with the rows.
//!
//! ## Available Calculations
//!
//! - [`rows`] - Riser heights and C-values for every row of a section

pub mod rows;

pub use rows::{calculate, RowCalculator, MAX_RISER_INCREMENTS};
