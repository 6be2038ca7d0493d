//! # Sightline Configuration
//!
//! The nine input parameters of a seating section. All distances share one
//! linear unit (millimetres by convention); nothing in the crate converts
//! between units.
//!
//! A [`Configuration`] can only exist in a validated state. Use
//! [`Configuration::default()`] for the standard stadium section, or
//! [`Configuration::builder()`] to override individual values.
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::config::Configuration;
//!
//! let config = Configuration::builder()
//!     .with_number_of_rows(20)
//!     .with_minimum_c_value(90.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.number_of_rows(), 20);
//! assert_eq!(config.tread_size(), 900.0);
//! ```
//!
//! ## JSON Example
//!
//! Missing fields take their defaults, and deserialization runs the same
//! validation as [`ConfigurationBuilder::build`].
//!
//! ```json
//! {
//!   "eye_height": 1220.0,
//!   "tread_size": 900.0,
//!   "riser_increment": 25.0,
//!   "minimum_c_value": 60.0,
//!   "minimum_riser_height": 180.0,
//!   "number_of_rows": 12,
//!   "distance_to_first_row_x": 10000.0,
//!   "distance_to_first_row_y": 1000.0,
//!   "mirror": false
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Seated eye height above the tread
pub const DEFAULT_EYE_HEIGHT: f64 = 1220.0;
/// Horizontal depth of each tier
pub const DEFAULT_TREAD_SIZE: f64 = 900.0;
/// Step applied to a riser while searching for clearance
pub const DEFAULT_RISER_INCREMENT: f64 = 25.0;
/// Required clearance over the head in front
pub const DEFAULT_MINIMUM_C_VALUE: f64 = 60.0;
/// Lowest riser the search starts from
pub const DEFAULT_MINIMUM_RISER_HEIGHT: f64 = 180.0;
/// Rows in the section
pub const DEFAULT_NUMBER_OF_ROWS: usize = 12;
/// Largest section the calculator accepts
pub const MAX_NUMBER_OF_ROWS: usize = 10_000;
/// Horizontal distance from the focus point to the first row's eye
pub const DEFAULT_DISTANCE_TO_FIRST_ROW_X: f64 = 10000.0;
/// Elevation of the first tread above the focus datum
pub const DEFAULT_DISTANCE_TO_FIRST_ROW_Y: f64 = 1000.0;

/// Validated, immutable sightline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationBuilder")]
pub struct Configuration {
    eye_height: f64,
    tread_size: f64,
    riser_increment: f64,
    minimum_c_value: f64,
    minimum_riser_height: f64,
    number_of_rows: usize,
    distance_to_first_row_x: f64,
    distance_to_first_row_y: f64,
    mirror: bool,
}

impl Configuration {
    /// Start a builder pre-filled with the default values.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Eye height of a seated spectator above their tread
    pub fn eye_height(&self) -> f64 {
        self.eye_height
    }

    /// Horizontal depth (going) of every tier
    pub fn tread_size(&self) -> f64 {
        self.tread_size
    }

    /// Amount added to a riser on each search step
    pub fn riser_increment(&self) -> f64 {
        self.riser_increment
    }

    /// Minimum clearance over the head of the spectator in front
    pub fn minimum_c_value(&self) -> f64 {
        self.minimum_c_value
    }

    /// Smallest riser height any row may have
    pub fn minimum_riser_height(&self) -> f64 {
        self.minimum_riser_height
    }

    /// Number of rows in the section (always at least one)
    pub fn number_of_rows(&self) -> usize {
        self.number_of_rows
    }

    /// Horizontal distance from the focus point to the first row's eye
    pub fn distance_to_first_row_x(&self) -> f64 {
        self.distance_to_first_row_x
    }

    /// Elevation of the first tread above the focus point
    pub fn distance_to_first_row_y(&self) -> f64 {
        self.distance_to_first_row_y
    }

    /// Whether profile points are mirrored about the vertical (YZ) plane
    pub fn mirror(&self) -> bool {
        self.mirror
    }

    /// Builder holding this configuration's values, for deriving a variant.
    pub fn to_builder(&self) -> ConfigurationBuilder {
        ConfigurationBuilder {
            eye_height: self.eye_height,
            tread_size: self.tread_size,
            riser_increment: self.riser_increment,
            minimum_c_value: self.minimum_c_value,
            minimum_riser_height: self.minimum_riser_height,
            number_of_rows: self.number_of_rows,
            distance_to_first_row_x: self.distance_to_first_row_x,
            distance_to_first_row_y: self.distance_to_first_row_y,
            mirror: self.mirror,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            eye_height: DEFAULT_EYE_HEIGHT,
            tread_size: DEFAULT_TREAD_SIZE,
            riser_increment: DEFAULT_RISER_INCREMENT,
            minimum_c_value: DEFAULT_MINIMUM_C_VALUE,
            minimum_riser_height: DEFAULT_MINIMUM_RISER_HEIGHT,
            number_of_rows: DEFAULT_NUMBER_OF_ROWS,
            distance_to_first_row_x: DEFAULT_DISTANCE_TO_FIRST_ROW_X,
            distance_to_first_row_y: DEFAULT_DISTANCE_TO_FIRST_ROW_Y,
            mirror: false,
        }
    }
}

/// Unvalidated parameter set.
///
/// Every setter consumes and returns the builder so calls chain; nothing is
/// checked until [`build`](ConfigurationBuilder::build).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigurationBuilder {
    pub eye_height: f64,
    pub tread_size: f64,
    pub riser_increment: f64,
    pub minimum_c_value: f64,
    pub minimum_riser_height: f64,
    pub number_of_rows: usize,
    pub distance_to_first_row_x: f64,
    pub distance_to_first_row_y: f64,
    pub mirror: bool,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Configuration::default().to_builder()
    }
}

impl ConfigurationBuilder {
    pub fn with_eye_height(mut self, eye_height: f64) -> Self {
        self.eye_height = eye_height;
        self
    }

    pub fn with_tread_size(mut self, tread_size: f64) -> Self {
        self.tread_size = tread_size;
        self
    }

    pub fn with_riser_increment(mut self, riser_increment: f64) -> Self {
        self.riser_increment = riser_increment;
        self
    }

    pub fn with_minimum_c_value(mut self, minimum_c_value: f64) -> Self {
        self.minimum_c_value = minimum_c_value;
        self
    }

    pub fn with_minimum_riser_height(mut self, minimum_riser_height: f64) -> Self {
        self.minimum_riser_height = minimum_riser_height;
        self
    }

    pub fn with_number_of_rows(mut self, number_of_rows: usize) -> Self {
        self.number_of_rows = number_of_rows;
        self
    }

    pub fn with_distance_to_first_row_x(mut self, distance: f64) -> Self {
        self.distance_to_first_row_x = distance;
        self
    }

    pub fn with_distance_to_first_row_y(mut self, distance: f64) -> Self {
        self.distance_to_first_row_y = distance;
        self
    }

    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let finite = [
            ("eye_height", self.eye_height),
            ("tread_size", self.tread_size),
            ("riser_increment", self.riser_increment),
            ("minimum_c_value", self.minimum_c_value),
            ("minimum_riser_height", self.minimum_riser_height),
            ("distance_to_first_row_x", self.distance_to_first_row_x),
            ("distance_to_first_row_y", self.distance_to_first_row_y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CalcError::invalid_configuration(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }

        if self.number_of_rows < 1 {
            return Err(CalcError::invalid_configuration(
                "number_of_rows",
                self.number_of_rows.to_string(),
                "At least one row is required",
            ));
        }
        if self.number_of_rows > MAX_NUMBER_OF_ROWS {
            return Err(CalcError::invalid_configuration(
                "number_of_rows",
                self.number_of_rows.to_string(),
                format!("A section is limited to {} rows", MAX_NUMBER_OF_ROWS),
            ));
        }
        if self.tread_size <= 0.0 {
            return Err(CalcError::invalid_configuration(
                "tread_size",
                self.tread_size.to_string(),
                "Tread size must be positive",
            ));
        }
        if self.riser_increment <= 0.0 {
            return Err(CalcError::invalid_configuration(
                "riser_increment",
                self.riser_increment.to_string(),
                "Riser increment must be positive or the riser search never ends",
            ));
        }
        if self.minimum_riser_height < 0.0 {
            return Err(CalcError::invalid_configuration(
                "minimum_riser_height",
                self.minimum_riser_height.to_string(),
                "Minimum riser height cannot be negative",
            ));
        }
        if self.eye_height <= 0.0 {
            return Err(CalcError::invalid_configuration(
                "eye_height",
                self.eye_height.to_string(),
                "Eye height must be positive",
            ));
        }
        Ok(())
    }

    /// Validate and freeze into a [`Configuration`].
    pub fn build(self) -> CalcResult<Configuration> {
        self.validate()?;
        Ok(Configuration {
            eye_height: self.eye_height,
            tread_size: self.tread_size,
            riser_increment: self.riser_increment,
            minimum_c_value: self.minimum_c_value,
            minimum_riser_height: self.minimum_riser_height,
            number_of_rows: self.number_of_rows,
            distance_to_first_row_x: self.distance_to_first_row_x,
            distance_to_first_row_y: self.distance_to_first_row_y,
            mirror: self.mirror,
        })
    }
}

impl TryFrom<ConfigurationBuilder> for Configuration {
    type Error = CalcError;

    fn try_from(builder: ConfigurationBuilder) -> CalcResult<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.eye_height(), 1220.0);
        assert_eq!(config.tread_size(), 900.0);
        assert_eq!(config.riser_increment(), 25.0);
        assert_eq!(config.minimum_c_value(), 60.0);
        assert_eq!(config.minimum_riser_height(), 180.0);
        assert_eq!(config.number_of_rows(), 12);
        assert_eq!(config.distance_to_first_row_x(), 10000.0);
        assert_eq!(config.distance_to_first_row_y(), 1000.0);
        assert!(!config.mirror());
    }

    #[test]
    fn test_default_builder_builds_default() {
        let config = Configuration::builder().build().unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Configuration::builder()
            .with_eye_height(1100.0)
            .with_number_of_rows(30)
            .with_mirror(true)
            .build()
            .unwrap();
        assert_eq!(config.eye_height(), 1100.0);
        assert_eq!(config.number_of_rows(), 30);
        assert!(config.mirror());
        assert_eq!(config.tread_size(), DEFAULT_TREAD_SIZE);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = Configuration::builder().with_number_of_rows(0).build().unwrap_err();
        assert!(matches!(err, CalcError::InvalidConfiguration { ref field, .. } if field == "number_of_rows"));
    }

    #[test]
    fn test_row_count_upper_bound() {
        let err = Configuration::builder().with_number_of_rows(usize::MAX).build().unwrap_err();
        assert!(matches!(err, CalcError::InvalidConfiguration { ref field, .. } if field == "number_of_rows"));
        assert!(Configuration::builder()
            .with_number_of_rows(MAX_NUMBER_OF_ROWS + 1)
            .build()
            .is_err());
        assert!(Configuration::builder()
            .with_number_of_rows(MAX_NUMBER_OF_ROWS)
            .build()
            .is_ok());
    }

    #[test]
    fn test_non_positive_tread_rejected() {
        assert!(Configuration::builder().with_tread_size(0.0).build().is_err());
        assert!(Configuration::builder().with_tread_size(-900.0).build().is_err());
    }

    #[test]
    fn test_non_positive_riser_increment_rejected() {
        let err = Configuration::builder().with_riser_increment(0.0).build().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
        assert!(Configuration::builder().with_riser_increment(-5.0).build().is_err());
    }

    #[test]
    fn test_negative_minimum_riser_rejected() {
        assert!(Configuration::builder().with_minimum_riser_height(-1.0).build().is_err());
        assert!(Configuration::builder().with_minimum_riser_height(0.0).build().is_ok());
    }

    #[test]
    fn test_non_positive_eye_height_rejected() {
        assert!(Configuration::builder().with_eye_height(0.0).build().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Configuration::builder().with_eye_height(f64::NAN).build().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(Configuration::builder()
            .with_distance_to_first_row_x(f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let config: Configuration = serde_json::from_str(r#"{ "number_of_rows": 5 }"#).unwrap();
        assert_eq!(config.number_of_rows(), 5);
        assert_eq!(config.eye_height(), DEFAULT_EYE_HEIGHT);
    }

    #[test]
    fn test_json_validates() {
        let result: Result<Configuration, _> = serde_json::from_str(r#"{ "riser_increment": 0.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialization() {
        let config = Configuration::builder().with_mirror(true).build().unwrap();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
