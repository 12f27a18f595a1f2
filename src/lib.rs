//! Local east/north projection of GPS tracks on a spherical Earth.

pub mod batch;
pub mod error;
pub mod geo;
pub mod track;

pub use batch::{convert_all_to_local, convert_relative_to, par_convert_all_to_local};
pub use error::{Axis, Error, Result};
pub use geo::{
    bearing_degrees, deg_to_rad, geodetic_to_local, haversine_distance, initial_bearing,
    GeodeticPoint, LocalPoint, Projector, EARTH_EQUATORIAL_RADIUS_M, EARTH_MEAN_RADIUS_M,
    EARTH_POLAR_RADIUS_M,
};

/// Sends `tracing` output to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
