//! Displacement value type
//!
//! Pure functions for distance and bearing on the local east/north plane.

use libm::{atan2, cos, sqrt};

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Position relative to the reference point, in metres east and north
///
/// Used both for waypoint locations and for the walker's reported location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    east: f64,
    north: f64,
}

impl Displacement {
    /// Create a displacement from easting and northing
    pub const fn new(east: f64, north: f64) -> Self {
        Self { east, north }
    }

    /// Metres east of the reference point (negative is west)
    pub fn east(&self) -> f64 {
        self.east
    }

    /// Metres north of the reference point (negative is south)
    pub fn north(&self) -> f64 {
        self.north
    }

    /// Check that both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.east.is_finite() && self.north.is_finite()
    }

    /// Straight-line distance from the reference point
    pub fn distance(&self) -> f64 {
        sqrt(self.east * self.east + self.north * self.north)
    }

    /// Bearing from the reference point in degrees
    ///
    /// Measured clockwise from north, in the range `[0, 360)`.
    pub fn bearing(&self) -> f64 {
        // atan2(x, y) with east as x gives the angle from north
        let mut radians = atan2(self.east, self.north);
        if radians < 0.0 {
            radians += 2.0 * core::f64::consts::PI;
        }
        let degrees = radians * RAD_TO_DEG;
        // -0.0 and rounding at 2π both land on 360.0
        if degrees >= 360.0 {
            0.0
        } else {
            degrees + 0.0
        }
    }

    /// Displacement from this position to `target`
    pub fn towards(&self, target: &Displacement) -> Displacement {
        Displacement::new(target.east - self.east, target.north - self.north)
    }

    /// Distance between this position and `other`, via their polar forms
    pub fn distance_to(&self, other: &Displacement) -> f64 {
        polar_distance(
            self.distance(),
            self.bearing(),
            other.distance(),
            other.bearing(),
        )
    }
}

/// Distance between two points given in polar form around the same origin
///
/// Law of cosines on the angle between the two bearings. The signed bearing
/// difference goes straight into `cos`, which is even and 360° periodic, so
/// 359° against 1° separates by 2°, not 358°.
///
/// # Arguments
///
/// * `d1`, `bearing1` - First point: distance and bearing in degrees
/// * `d2`, `bearing2` - Second point: distance and bearing in degrees
///
/// # Returns
///
/// Separation of the two points. Never NaN for finite inputs; NaN for
/// non-finite ones, so it compares false against any threshold.
pub fn polar_distance(d1: f64, bearing1: f64, d2: f64, bearing2: f64) -> f64 {
    let angle = (bearing1 - bearing2) * DEG_TO_RAD;
    let squared = d1 * d1 + d2 * d2 - 2.0 * d1 * d2 * cos(angle);
    // Coincident points can round a hair below zero
    if squared < 0.0 {
        0.0
    } else {
        sqrt(squared)
    }
}
