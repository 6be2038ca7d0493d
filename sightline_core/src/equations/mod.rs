//! # Sightline Equations
//!
//! The geometric relations used by the riser search, kept apart from the
//! iteration so each formula can be checked against hand calculations.
//!
//! ## Modules
//!
//! - [`sightline`] - C-value clearance and its closed-form inverse
//!
//! ## References
//!
//! - Green Guide: Guide to Safety at Sports Grounds, 6th Edition, Section 12
//! - John, Sheard & Vickery: Stadia, A Design and Development Guide

pub mod sightline;

pub use sightline::{
    checked_clearance,
    clearance,
    clearance_slope,
    increments_needed,
    required_riser_height,
};
