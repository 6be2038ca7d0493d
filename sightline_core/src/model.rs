//! # Sightline Model
//!
//! [`SightlineModel`] owns the finished row sequence of one seating section.
//! It is built once from a [`Configuration`] and never changes afterward;
//! a different configuration means a new model.
//!
//! ## Structure
//!
//! ```text
//! SightlineModel
//! ├── config: Configuration (the nine inputs)
//! └── rows: Vec<Row> (index 0 = front row, nearest the focus)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::model::SightlineModel;
//!
//! let model = SightlineModel::with_defaults().unwrap();
//!
//! let second = &model.rows()[1];
//! assert_eq!(second.riser_height(), Some(280.0));
//! assert_eq!(second.height_to_focus(), 2500.0);
//! ```

use serde::Serialize;

use crate::calculations::rows::RowCalculator;
use crate::config::Configuration;
use crate::errors::CalcResult;

/// One seating tier.
///
/// All distances are measured from the row's eye position to the focus
/// point. Rows are only created by the row calculator and are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    index: usize,
    eye_to_focus_x: f64,
    riser_height: Option<f64>,
    height_to_focus: f64,
    going: f64,
    eye_height: f64,
    c_value: Option<f64>,
}

impl Row {
    pub(crate) fn new(
        index: usize,
        eye_to_focus_x: f64,
        riser_height: Option<f64>,
        height_to_focus: f64,
        going: f64,
        eye_height: f64,
        c_value: Option<f64>,
    ) -> Self {
        Row {
            index,
            eye_to_focus_x,
            riser_height,
            height_to_focus,
            going,
            eye_height,
            c_value,
        }
    }

    /// Position in the section, 0 being the front row
    pub fn index(&self) -> usize {
        self.index
    }

    /// Horizontal distance from this row's eye to the focus point
    pub fn eye_to_focus_x(&self) -> f64 {
        self.eye_to_focus_x
    }

    /// Step up from the previous row; `None` for the front row
    pub fn riser_height(&self) -> Option<f64> {
        self.riser_height
    }

    /// Vertical distance from this row's eye down to the focus elevation
    pub fn height_to_focus(&self) -> f64 {
        self.height_to_focus
    }

    /// Horizontal tread depth
    pub fn going(&self) -> f64 {
        self.going
    }

    /// Seated eye height above the tread
    pub fn eye_height(&self) -> f64 {
        self.eye_height
    }

    /// Clearance achieved over this row by the row behind it.
    ///
    /// `None` for the last row, which has nobody behind it.
    pub fn c_value(&self) -> Option<f64> {
        self.c_value
    }

    /// Elevation of the tread surface above the focus point
    pub fn tread_elevation(&self) -> f64 {
        self.height_to_focus - self.eye_height
    }
}

/// Computed seating section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightlineModel {
    config: Configuration,
    rows: Vec<Row>,
}

impl SightlineModel {
    /// Build the model, computing every row.
    ///
    /// Either the whole row sequence is computed or an error is returned;
    /// no partially built model is ever observable.
    ///
    /// # Errors
    ///
    /// * `CalcError::NonFiniteResult` - the clearance formula divided by zero
    /// * `CalcError::ConvergenceFailed` - a row can never reach the minimum C-value
    pub fn new(config: Configuration) -> CalcResult<Self> {
        let rows = RowCalculator::new(&config).calculate()?;
        tracing::debug!(
            rows = rows.len(),
            total_rise = rows.iter().filter_map(Row::riser_height).sum::<f64>(),
            "built sightline model"
        );
        Ok(SightlineModel { config, rows })
    }

    /// Build the model for the default stadium section.
    pub fn with_defaults() -> CalcResult<Self> {
        SightlineModel::new(Configuration::default())
    }

    /// Ordered rows, front to back
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`, if it exists
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// The configuration this model was built from
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn eye_height(&self) -> f64 {
        self.config.eye_height()
    }

    pub fn tread_size(&self) -> f64 {
        self.config.tread_size()
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Sum of all riser heights (front tread to back tread)
    pub fn total_rise(&self) -> f64 {
        self.rows.iter().filter_map(Row::riser_height).sum()
    }

    /// Smallest C-value achieved anywhere in the section
    pub fn minimum_achieved_c_value(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(Row::c_value)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Tread elevation of the back row above the focus point
    pub fn last_row_elevation(&self) -> f64 {
        self.rows
            .last()
            .map(Row::tread_elevation)
            .unwrap_or(self.config.distance_to_first_row_y())
    }
}
