//! CSV ingestion and emission of GPS trajectories.

use anyhow::{bail, ensure, Context, Result};
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::geo::{GeodeticPoint, LocalPoint};

// Only these two columns are read; anything else in the log is ignored.
#[derive(Debug, Deserialize)]
struct TrackRow {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct LocalRow {
    latitude: f64,
    longitude: f64,
    x_local: f64,
    y_local: f64,
}

/// Reads `latitude`/`longitude` columns from a headed CSV, validating every row.
pub fn read_track(path: impl AsRef<Path>) -> Result<Vec<GeodeticPoint>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (i, result) in rdr.deserialize::<TrackRow>().enumerate() {
        let row = i + 1;
        let rec = result.with_context(|| format!("{}: reading row {row}", path.display()))?;
        let point = GeodeticPoint::new(rec.latitude, rec.longitude)
            .with_context(|| format!("{}: row {row}", path.display()))?;
        points.push(point);
    }

    tracing::debug!(path = %path.display(), points = points.len(), "loaded track");
    Ok(points)
}

/// Writes the geodetic input alongside its local offsets.
pub fn write_local_track(
    path: impl AsRef<Path>,
    geodetic: &[GeodeticPoint],
    local: &[LocalPoint],
) -> Result<()> {
    let path = path.as_ref();
    ensure!(
        geodetic.len() == local.len(),
        "{} geodetic points but {} local points",
        geodetic.len(),
        local.len()
    );

    let mut wtr =
        Writer::from_path(path).with_context(|| format!("creating CSV {}", path.display()))?;
    for (i, (g, l)) in geodetic.iter().zip(local).enumerate() {
        wtr.serialize(LocalRow {
            latitude: g.lat(),
            longitude: g.lon(),
            x_local: l.x,
            y_local: l.y,
        })
        .with_context(|| format!("{}: writing row {}", path.display(), i + 1))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

/// Parses a `lat,lon` literal as given on the command line.
pub fn parse_point(s: &str) -> Result<GeodeticPoint> {
    let Some((lat, lon)) = s.split_once(',') else {
        bail!("expected `lat,lon`, got {s:?}");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad latitude in {s:?}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("bad longitude in {s:?}"))?;
    Ok(GeodeticPoint::new(lat, lon)?)
}
