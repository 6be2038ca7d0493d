//! # Profile Geometry
//!
//! Coordinate sequences describing the stepped cross-section of a seating
//! section, for a CAD or rendering layer to turn into curves.
//!
//! Points lie in the vertical XZ plane (y = 0) with the focus point at the
//! origin: `x` is the horizontal distance from the focus, `z` the elevation
//! of a tread surface above it.
//!
//! ```text
//!  z                      ┌── back point
//!  ↑                 ●────●
//!  │            ●────●  ← tread-top segment (front edge, back edge)
//!  │       ●────●
//!  └──────────────────────→ x
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sightline_core::geometry::{going_back_points, going_top_points};
//! use sightline_core::model::SightlineModel;
//!
//! let model = SightlineModel::with_defaults().unwrap();
//!
//! let top = going_top_points(&model, None);
//! assert_eq!(top.len(), 22);
//!
//! let back = going_back_points(&model);
//! assert_eq!((back[0].x, back[0].z), (10900.0, 1280.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Row, SightlineModel};

/// A point in the section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Horizontal distance from the focus point
    pub x: f64,
    /// Elevation above the focus point
    pub z: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, z: f64) -> Self {
        ProfilePoint { x, z }
    }

    /// Depth coordinate; the section plane is always y = 0
    pub fn y(&self) -> f64 {
        0.0
    }

    /// Coordinates as `[x, y, z]` for a 3D consumer
    pub fn to_xyz(&self) -> [f64; 3] {
        [self.x, 0.0, self.z]
    }

    /// Reflect across the vertical plane through the focus
    pub fn mirrored(&self) -> Self {
        ProfilePoint { x: -self.x, z: self.z }
    }

    /// Straight-line distance to `other`
    pub fn distance_to(&self, other: &ProfilePoint) -> f64 {
        (other.x - self.x).hypot(other.z - self.z)
    }
}

/// Connected tread-top profile of a section.
///
/// Plain data: the ordered concatenation of [`going_top_points`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfilePolyline {
    points: Vec<ProfilePoint>,
}

impl ProfilePolyline {
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, alternating tread and riser segments
    pub fn segments(&self) -> impl Iterator<Item = (ProfilePoint, ProfilePoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Total length of all segments
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance_to(&b)).sum()
    }

    pub fn into_points(self) -> Vec<ProfilePoint> {
        self.points
    }
}

/// Front and back edge of each tread behind the front row.
///
/// Emits `2 * (number_of_rows - 1)` points. `mirror_override` replaces the
/// configuration's `mirror` flag when set; mirroring negates `x` only.
pub fn going_top_points(model: &SightlineModel, mirror_override: Option<bool>) -> Vec<ProfilePoint> {
    let mirror = mirror_override.unwrap_or(model.configuration().mirror());
    let orient = |p: ProfilePoint| if mirror { p.mirrored() } else { p };

    model
        .rows()
        .iter()
        .skip(1)
        .flat_map(|row| {
            let z = row.tread_elevation();
            [
                orient(ProfilePoint::new(row.eye_to_focus_x() - row.going(), z)),
                orient(ProfilePoint::new(row.eye_to_focus_x(), z)),
            ]
        })
        .collect()
}

/// Back edge of each tread behind the front row, for hosting seats.
///
/// Emits `number_of_rows - 1` points and is never mirrored.
pub fn going_back_points(model: &SightlineModel) -> Vec<ProfilePoint> {
    model
        .rows()
        .iter()
        .skip(1)
        .map(|row: &Row| ProfilePoint::new(row.eye_to_focus_x(), row.tread_elevation()))
        .collect()
}

/// Tread-top points joined into one profile.
pub fn profile_polyline(model: &SightlineModel, mirror_override: Option<bool>) -> ProfilePolyline {
    ProfilePolyline {
        points: going_top_points(model, mirror_override),
    }
}
