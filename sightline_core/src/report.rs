//! # Text Report
//!
//! Renders a model as a plain-text diagnostic table: one header line per
//! configuration parameter, then one tab-separated line per row.
//!
//! ## Layout
//!
//! ```text
//! Number of Rows in Section            =	12
//! ...
//! Mirrored profile                     =	false
//!
//! row:	riser:	dist:	elev:	c-value:
//! 1	NA	10000	1000	NA
//! 2	280	10900	1280	...
//! ```
//!
//! Row numbers are 1-based. Row values are rounded to two decimals
//! (half-to-even) and printed without trailing zeros. `NA` marks the front
//! row's riser and C-value and the last row's C-value.
//!
//! The C-value column shows each row's own stored value, the clearance the
//! row behind gives it. The riser on line `i` therefore sits next to the
//! clearance produced by line `i + 1`'s riser, and the front row's C-value
//! is not printed; read it from [`Row::c_value`](crate::model::Row::c_value).
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::model::SightlineModel;
//! use sightline_core::report::render_report;
//!
//! let model = SightlineModel::with_defaults().unwrap();
//! let report = render_report(&model);
//!
//! assert!(report.contains("row:\triser:\tdist:\telev:\tc-value:"));
//! assert!(report.contains("\n1\tNA\t10000\t1000\tNA\n"));
//! ```

use std::fmt;

use crate::config::Configuration;
use crate::model::SightlineModel;

/// Placeholder for values a row does not have
pub const NOT_AVAILABLE: &str = "NA";

/// Column headings of the row table
pub const TABLE_HEADING: &str = "row:\triser:\tdist:\telev:\tc-value:";

/// Display adapter producing the full report.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    model: &'a SightlineModel,
}

impl<'a> Report<'a> {
    pub fn new(model: &'a SightlineModel) -> Self {
        Report { model }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.model.configuration())?;
        writeln!(f)?;
        writeln!(f, "{}", TABLE_HEADING)?;

        let rows = self.model.rows();
        let last = rows.len().saturating_sub(1);
        for (i, row) in rows.iter().enumerate() {
            let riser = if i == 0 {
                NOT_AVAILABLE.to_string()
            } else {
                optional_value(row.riser_height())
            };
            let c_value = if i == 0 || i == last {
                NOT_AVAILABLE.to_string()
            } else {
                optional_value(row.c_value())
            };
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}",
                i + 1,
                riser,
                format_value(row.eye_to_focus_x()),
                format_value(row.tread_elevation()),
                c_value
            )?;
        }
        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, config: &Configuration) -> fmt::Result {
    let lines: [(&str, String); 9] = [
        ("Number of Rows in Section", config.number_of_rows().to_string()),
        ("Distance to first spectator", config.distance_to_first_row_x().to_string()),
        ("Minimum sight line clearance", config.minimum_c_value().to_string()),
        ("Eye level above tread", config.eye_height().to_string()),
        ("Elevation of first tread above datum", config.distance_to_first_row_y().to_string()),
        ("Tread size", config.tread_size().to_string()),
        ("Minimum riser height", config.minimum_riser_height().to_string()),
        ("Minimum riser increment", config.riser_increment().to_string()),
        ("Mirrored profile", config.mirror().to_string()),
    ];
    for (label, value) in lines {
        writeln!(f, "{:<37}=\t{}", label, value)?;
    }
    Ok(())
}

/// Round to two decimals, half-to-even, and print in shortest form.
pub fn format_value(value: f64) -> String {
    let rounded = (value * 100.0).round_ties_even() / 100.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    rounded.to_string()
}

fn optional_value(value: Option<f64>) -> String {
    value.map(format_value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render the full report for `model`.
pub fn render_report(model: &SightlineModel) -> String {
    Report::new(model).to_string()
}
