//! # sightline_core - Tiered Seating Sightline Engine
//!
//! `sightline_core` computes the riser heights of a stadium or theatre
//! section so that every spectator sees a common focus point over the head
//! of the spectator in front, by at least a minimum clearance (the C-value).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: A configuration goes in, an immutable model comes out
//! - **JSON-First**: Configurations, rows and points implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No CAD dependency**: Geometry is returned as plain coordinate lists
//!
//! ## Quick Start
//!
//! ```rust
//! use sightline_core::{Configuration, SightlineModel};
//! use sightline_core::geometry::going_top_points;
//! use sightline_core::report::render_report;
//!
//! let config = Configuration::builder()
//!     .with_number_of_rows(8)
//!     .build()
//!     .unwrap();
//! let model = SightlineModel::new(config).unwrap();
//!
//! let profile = going_top_points(&model, None);
//! assert_eq!(profile.len(), 14);
//!
//! println!("{}", render_report(&model));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - The nine input parameters and their defaults
//! - [`calculations`] - The iterative riser search
//! - [`equations`] - C-value clearance formulas
//! - [`model`] - Computed rows and section-level accessors
//! - [`geometry`] - Tread-top and tread-back point sequences
//! - [`report`] - Fixed-column text report
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod model;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use config::{Configuration, ConfigurationBuilder};
pub use errors::{CalcError, CalcResult};
pub use geometry::{going_back_points, going_top_points, profile_polyline, ProfilePoint, ProfilePolyline};
pub use model::{Row, SightlineModel};
pub use report::render_report;
