//! Spherical-Earth projection of latitude/longitude onto a local east/north plane.
//!
//! A target is placed relative to an origin by walking the great-circle
//! distance along the initial bearing: `x = d·sin(θ)` east, `y = d·cos(θ)` north.
//! This is a small-extent approximation and drifts at tens of kilometers.

use std::f64::consts::PI;

use crate::error::{Axis, Error, Result};

/// Mean Earth radius in meters.
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;
/// WGS84 semi-major axis in meters.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;
/// WGS84 semi-minor axis in meters.
pub const EARTH_POLAR_RADIUS_M: f64 = 6_356_752.314_245;

/// A latitude/longitude pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeodeticPoint {
    lat: f64,
    lon: f64,
}

impl GeodeticPoint {
    /// Builds a point, rejecting non-finite values and out-of-range degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        check_axis(Axis::Latitude, lat, 90.0)?;
        check_axis(Axis::Longitude, lon, 180.0)?;
        Ok(Self { lat, lon })
    }

    /// Builds a point without range checks. NaN in, NaN out.
    pub fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_rad(&self) -> f64 {
        deg_to_rad(self.lat)
    }

    pub fn lon_rad(&self) -> f64 {
        deg_to_rad(self.lon)
    }
}

fn check_axis(axis: Axis, value: f64, limit: f64) -> Result<()> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate { axis, value })
    }
}

/// Offset from an origin in meters: `x` east, `y` north.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl LocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar distance from the origin.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Forward azimuth from `origin` to `target` in radians, clockwise from north,
/// in (-π, π].
///
/// Coincident points have no direction; they report 0.
pub fn initial_bearing(origin: GeodeticPoint, target: GeodeticPoint) -> f64 {
    let (lat1, lat2) = (origin.lat_rad(), target.lat_rad());
    let dlon = target.lon_rad() - origin.lon_rad();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = x.atan2(y);
    // atan2(-0.0, negative) lands on -π
    if bearing == -PI {
        PI
    } else {
        bearing
    }
}

/// Compass bearing from `origin` to `target` in degrees, in [0, 360).
pub fn bearing_degrees(origin: GeodeticPoint, target: GeodeticPoint) -> f64 {
    let deg = initial_bearing(origin, target).to_degrees().rem_euclid(360.0);
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Great-circle distance on the mean-radius sphere.
pub fn haversine_distance(origin: GeodeticPoint, target: GeodeticPoint) -> f64 {
    Projector::default().haversine_distance(origin, target)
}

/// Local offset of `target` from `origin` on the mean-radius sphere.
pub fn geodetic_to_local(origin: GeodeticPoint, target: GeodeticPoint) -> LocalPoint {
    Projector::default().geodetic_to_local(origin, target)
}

/// Projects geodetic points onto a sphere of fixed radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projector {
    radius_m: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            radius_m: EARTH_MEAN_RADIUS_M,
        }
    }
}

impl Projector {
    pub fn with_radius(radius_m: f64) -> Result<Self> {
        if radius_m.is_finite() && radius_m > 0.0 {
            Ok(Self { radius_m })
        } else {
            Err(Error::InvalidRadius(radius_m))
        }
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Great-circle distance in meters using the haversine formula.
    pub fn haversine_distance(&self, origin: GeodeticPoint, target: GeodeticPoint) -> f64 {
        let (lat1, lat2) = (origin.lat_rad(), target.lat_rad());
        let dlat = lat2 - lat1;
        let dlon = target.lon_rad() - origin.lon_rad();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // rounding can push `a` a hair outside [0, 1] near coincident or antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.radius_m * c
    }

    /// Position of `target` in the east/north plane centered on `origin`.
    pub fn geodetic_to_local(&self, origin: GeodeticPoint, target: GeodeticPoint) -> LocalPoint {
        let distance = self.haversine_distance(origin, target);
        let bearing = initial_bearing(origin, target);
        LocalPoint {
            x: distance * bearing.sin(),
            y: distance * bearing.cos(),
        }
    }
}
