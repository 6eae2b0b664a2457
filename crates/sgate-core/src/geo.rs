//! # Geographic Coordinates
//!
//! Defines `GeoPoint`, the validated latitude/longitude pair used for
//! institution anchor locations.
//!
//! ## Invariant
//!
//! A `GeoPoint` that exists holds finite coordinates inside the valid
//! latitude (−90..90) and longitude (−180..180) ranges. The only
//! constructors are [`GeoPoint::new()`] and the `Deserialize` impl, which
//! routes through the same validation, so a record read back from storage
//! cannot smuggle an invalid anchor into the verifier.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inclusive latitude bound, degrees.
pub const LATITUDE_BOUND: f64 = 90.0;

/// Inclusive longitude bound, degrees.
pub const LONGITUDE_BOUND: f64 = 180.0;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Fields are private; use [`GeoPoint::new()`] to construct and the
/// [`GeoPoint::latitude()`] / [`GeoPoint::longitude()`] accessors to read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Unvalidated wire form of a coordinate pair, used only as the
/// deserialization source for `GeoPoint`.
#[derive(Debug, Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Construct a coordinate pair, validating both axes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CoordinateOutOfRange`] if either coordinate is
    /// non-finite (NaN, ±∞) or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !latitude.is_finite() || latitude.abs() > LATITUDE_BOUND {
            return Err(CoreError::CoordinateOutOfRange {
                axis: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() || longitude.abs() > LONGITUDE_BOUND {
            return Err(CoreError::CoordinateOutOfRange {
                axis: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoreError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
