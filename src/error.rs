//! Error types for coordinate projection.

use std::fmt;

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a coordinate pair was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors raised at the boundary before any trigonometry runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a non-finite value.
    InvalidCoordinate {
        /// The offending axis.
        axis: Axis,
        /// The rejected value in degrees.
        value: f64,
    },
    /// Sphere radius that is not a finite positive number of meters.
    InvalidRadius(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCoordinate { axis, value } if !value.is_finite() => {
                write!(f, "{axis} must be finite, got {value}")
            }
            Error::InvalidCoordinate { axis, value } => {
                let limit = match axis {
                    Axis::Latitude => 90,
                    Axis::Longitude => 180,
                };
                write!(f, "{axis} {value} is outside [-{limit}, {limit}] degrees")
            }
            Error::InvalidRadius(r) => {
                write!(f, "sphere radius must be a finite positive number of meters, got {r}")
            }
        }
    }
}

impl std::error::Error for Error {}
