//! # Row Calculation
//!
//! Derives riser heights for a seating section so every spectator sees the
//! focus point over the head of the spectator in front.
//!
//! ## Method
//!
//! 1. The front row sits at `X0 = distance_to_first_row_x` and
//!    `H0 = distance_to_first_row_y + eye_height`.
//! 2. Each following row starts at the minimum riser height. While the
//!    C-value it gives the row in front is below the minimum, the riser is
//!    raised by one increment.
//! 3. The accepted C-value is stored on the row in front, so the last row
//!    never receives one.
//!
//! Placing a row and scoring the row ahead of it are one step: the riser of
//! row `i` and the C-value of row `i - 1` are produced together.
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::calculations::rows::RowCalculator;
//! use sightline_core::config::Configuration;
//!
//! let config = Configuration::default();
//! let rows = RowCalculator::new(&config).calculate().unwrap();
//!
//! // 180, 205, 230 and 255 all leave less than 60 mm of clearance
//! assert_eq!(rows[1].riser_height(), Some(280.0));
//! ```

use crate::config::Configuration;
use crate::equations::sightline::{checked_clearance, increments_needed, required_riser_height};
use crate::errors::{CalcError, CalcResult};
use crate::model::Row;

/// Upper bound on riser increments tried for a single row.
pub const MAX_RISER_INCREMENTS: u64 = 100_000;

/// Mutable accumulator for a row whose C-value is not known yet.
#[derive(Debug, Clone, Copy)]
struct RowDraft {
    index: usize,
    eye_to_focus_x: f64,
    riser_height: Option<f64>,
    height_to_focus: f64,
    c_value: Option<f64>,
}

/// Iterative riser search over one configuration.
#[derive(Debug, Clone, Copy)]
pub struct RowCalculator<'a> {
    config: &'a Configuration,
}

impl<'a> RowCalculator<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        RowCalculator { config }
    }

    /// Compute every row of the section, front to back.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Row>)` - exactly `number_of_rows` rows
    /// * `Err(CalcError::NonFiniteResult)` - the clearance formula divided by zero
    /// * `Err(CalcError::ConvergenceFailed)` - no riser reaches the minimum C-value
    pub fn calculate(&self) -> CalcResult<Vec<Row>> {
        let count = self.config.number_of_rows();
        let mut drafts = Vec::with_capacity(count);
        drafts.push(self.front_row());

        for index in 1..count {
            let front = drafts[index - 1];
            let (front_c_value, draft) = self.place_behind(&front, index)?;
            drafts[index - 1].c_value = Some(front_c_value);
            drafts.push(draft);
        }

        Ok(drafts.into_iter().map(|draft| self.finish(draft)).collect())
    }

    fn front_row(&self) -> RowDraft {
        RowDraft {
            index: 0,
            eye_to_focus_x: self.config.distance_to_first_row_x(),
            riser_height: None,
            height_to_focus: self.config.distance_to_first_row_y() + self.config.eye_height(),
            c_value: None,
        }
    }

    /// Place row `index` behind `front`, returning the C-value `front` ends up
    /// with together with the new row.
    fn place_behind(&self, front: &RowDraft, index: usize) -> CalcResult<(f64, RowDraft)> {
        let tread = self.config.tread_size();
        let increment = self.config.riser_increment();
        let minimum_c = self.config.minimum_c_value();
        let minimum_riser = self.config.minimum_riser_height();

        let score = |riser: f64| {
            checked_clearance(front.index, front.eye_to_focus_x, front.height_to_focus, tread, riser)
        };

        let mut riser = minimum_riser;
        let mut candidate = score(riser)?;

        if candidate < minimum_c {
            self.check_reachable(front, index)?;
        }

        let mut iterations: u64 = 0;
        while candidate < minimum_c {
            if iterations >= MAX_RISER_INCREMENTS {
                return Err(CalcError::convergence_failed(
                    index,
                    iterations,
                    format!("C-value stalled at {:.3} below the minimum {}", candidate, minimum_c),
                ));
            }
            riser += increment;
            iterations += 1;
            candidate = score(riser)?;
            tracing::trace!(row = index, riser, c_value = candidate, "raised riser");
        }

        let draft = RowDraft {
            index,
            eye_to_focus_x: self.config.distance_to_first_row_x() + index as f64 * tread,
            riser_height: Some(riser),
            height_to_focus: front.height_to_focus + riser,
            c_value: None,
        };
        Ok((candidate, draft))
    }

    /// Reject rows the search could never finish before starting it.
    fn check_reachable(&self, front: &RowDraft, index: usize) -> CalcResult<()> {
        let required = required_riser_height(
            front.eye_to_focus_x,
            front.height_to_focus,
            self.config.tread_size(),
            self.config.minimum_c_value(),
        )
        .ok_or_else(|| {
            CalcError::convergence_failed(
                index,
                0,
                format!(
                    "C-value does not increase with riser height at eye-to-focus distance {}",
                    front.eye_to_focus_x
                ),
            )
        })?;

        let steps = increments_needed(
            required,
            self.config.minimum_riser_height(),
            self.config.riser_increment(),
        );
        if steps > MAX_RISER_INCREMENTS as f64 {
            return Err(CalcError::convergence_failed(
                index,
                0,
                format!(
                    "required riser {:.1} needs more than {} increments of {}",
                    required,
                    MAX_RISER_INCREMENTS,
                    self.config.riser_increment()
                ),
            ));
        }
        Ok(())
    }

    fn finish(&self, draft: RowDraft) -> Row {
        Row::new(
            draft.index,
            draft.eye_to_focus_x,
            draft.riser_height,
            draft.height_to_focus,
            self.config.tread_size(),
            self.config.eye_height(),
            draft.c_value,
        )
    }
}

/// Compute the rows for `config`.
///
/// Shorthand for `RowCalculator::new(config).calculate()`.
pub fn calculate(config: &Configuration) -> CalcResult<Vec<Row>> {
    RowCalculator::new(config).calculate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::sightline::clearance;

    const EPSILON: f64 = 1e-9;

    fn default_rows() -> Vec<Row> {
        calculate(&Configuration::default()).unwrap()
    }

    #[test]
    fn test_row_count() {
        assert_eq!(default_rows().len(), 12);
    }

    #[test]
    fn test_front_row_position() {
        let rows = default_rows();
        assert_eq!(rows[0].eye_to_focus_x(), 10000.0);
        assert_eq!(rows[0].height_to_focus(), 2220.0);
        assert_eq!(rows[0].going(), 900.0);
        assert_eq!(rows[0].eye_height(), 1220.0);
        assert_eq!(rows[0].riser_height(), None);
    }

    #[test]
    fn test_second_row_converges_to_280() {
        let rows = default_rows();
        assert_eq!(rows[1].riser_height(), Some(280.0));
        assert_eq!(rows[1].height_to_focus(), 2500.0);

        // C = 10000 * 2500 / 10900 - 2220
        let expected = 10000.0 * 2500.0 / 10900.0 - 2220.0;
        let c = rows[0].c_value().unwrap();
        assert!((c - expected).abs() < EPSILON, "C = {}", c);
        assert!((c - 73.58).abs() < 0.005);

        // each smaller increment level falls short
        for riser in [180.0, 205.0, 230.0, 255.0] {
            assert!(clearance(10000.0, 2220.0, 900.0, riser) < 60.0, "R = {}", riser);
        }
    }

    #[test]
    fn test_horizontal_positions() {
        for (i, row) in default_rows().iter().enumerate() {
            let expected = 10000.0 + i as f64 * 900.0;
            assert!((row.eye_to_focus_x() - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_heights_accumulate_risers() {
        let rows = default_rows();
        for pair in rows.windows(2) {
            let riser = pair[1].riser_height().unwrap();
            assert_eq!(pair[1].height_to_focus(), pair[0].height_to_focus() + riser);
        }
    }

    #[test]
    fn test_risers_are_whole_increments() {
        for row in default_rows().iter().skip(1) {
            let riser = row.riser_height().unwrap();
            assert!(riser >= 180.0);
            let steps = (riser - 180.0) / 25.0;
            assert!((steps - steps.round()).abs() < EPSILON, "R = {}", riser);
        }
    }

    #[test]
    fn test_smallest_riser_is_chosen() {
        let rows = default_rows();
        for pair in rows.windows(2) {
            let riser = pair[1].riser_height().unwrap();
            if riser > 180.0 {
                let lower = clearance(
                    pair[0].eye_to_focus_x(),
                    pair[0].height_to_focus(),
                    900.0,
                    riser - 25.0,
                );
                assert!(lower < 60.0, "one increment less already gave C = {}", lower);
            }
        }
    }

    #[test]
    fn test_c_values_meet_minimum() {
        let rows = default_rows();
        for row in &rows[..rows.len() - 1] {
            assert!(row.c_value().unwrap() >= 60.0);
        }
        assert_eq!(rows.last().unwrap().c_value(), None);
    }

    #[test]
    fn test_minimum_riser_already_sufficient() {
        let config = Configuration::builder()
            .with_minimum_c_value(-1000.0)
            .build()
            .unwrap();
        for row in calculate(&config).unwrap().iter().skip(1) {
            assert_eq!(row.riser_height(), Some(180.0));
        }
    }

    #[test]
    fn test_exact_boundary_accepted() {
        // With X = 1000, T = 1000, H = 0 + 100: C = (100 + R) / 2 - 100.
        // R = 180 gives C = 40 exactly, which must be accepted.
        let config = Configuration::builder()
            .with_eye_height(100.0)
            .with_tread_size(1000.0)
            .with_distance_to_first_row_x(1000.0)
            .with_distance_to_first_row_y(0.0)
            .with_minimum_c_value(40.0)
            .with_number_of_rows(2)
            .build()
            .unwrap();
        let rows = calculate(&config).unwrap();
        assert_eq!(rows[1].riser_height(), Some(180.0));
        assert_eq!(rows[0].c_value(), Some(40.0));
    }

    #[test]
    fn test_single_row() {
        let config = Configuration::builder().with_number_of_rows(1).build().unwrap();
        let rows = calculate(&config).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].riser_height(), None);
        assert_eq!(rows[0].c_value(), None);
    }

    #[test]
    fn test_division_by_zero_reported() {
        let config = Configuration::builder()
            .with_distance_to_first_row_x(-900.0)
            .with_number_of_rows(3)
            .build()
            .unwrap();
        let err = calculate(&config).unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE_RESULT");
    }

    #[test]
    fn test_unreachable_clearance_fails() {
        // Focus directly under the front eye: clearance never grows
        let config = Configuration::builder()
            .with_distance_to_first_row_x(0.0)
            .build()
            .unwrap();
        let err = calculate(&config).unwrap_err();
        assert!(matches!(err, CalcError::ConvergenceFailed { row: 1, .. }));
    }

    #[test]
    fn test_too_many_increments_fails() {
        let config = Configuration::builder()
            .with_riser_increment(1e-6)
            .build()
            .unwrap();
        let err = calculate(&config).unwrap_err();
        assert_eq!(err.error_code(), "CONVERGENCE_FAILED");
    }

    #[test]
    fn test_absorbed_increment_stops_at_cap() {
        // At a 1e6 riser an increment of 1e-11 is below half an ulp, so the
        // riser never moves while the target sits only ~100 increments away.
        let start = 1.0e6;
        let target = clearance(10000.0, 2220.0, 900.0, start) + 1.0e-9;
        let config = Configuration::builder()
            .with_minimum_riser_height(start)
            .with_riser_increment(1.0e-11)
            .with_minimum_c_value(target)
            .with_number_of_rows(2)
            .build()
            .unwrap();
        let err = calculate(&config).unwrap_err();
        assert!(
            matches!(err, CalcError::ConvergenceFailed { row: 1, iterations, .. } if iterations == MAX_RISER_INCREMENTS),
            "{:?}",
            err
        );
    }
}
