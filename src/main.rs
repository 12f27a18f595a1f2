use anyhow::{Context, Result};
use clap::Parser;
use std::time::SystemTime;

use geolocal::{
    convert_all_to_local, par_convert_all_to_local, track, GeodeticPoint, LocalPoint, Projector,
    EARTH_MEAN_RADIUS_M,
};

#[derive(Parser, Debug)]
#[command(name = "geolocal")]
#[command(about = "Project a GPS track from a CSV (latitude, longitude columns) into local east/north meters around its first point.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Output CSV (latitude, longitude, x_local, y_local). If omitted, prints X/Y to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Sphere radius in meters
    #[arg(short, long, default_value_t = EARTH_MEAN_RADIUS_M)]
    radius: f64,

    /// Extra point (`lat,lon`) to project against the same origin
    #[arg(short, long)]
    waypoint: Option<String>,

    /// Convert points on the rayon thread pool
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

/// Farthest planar distance from the origin.
fn extent_m(local: &[LocalPoint]) -> f64 {
    local.iter().map(|p| p.magnitude()).fold(0.0_f64, f64::max)
}

/// Writes the CSV when `out` is given, otherwise returns one X/Y line per point.
/// The extent and optional waypoint lines are always returned.
fn report(
    projector: &Projector,
    points: &[GeodeticPoint],
    local: &[LocalPoint],
    waypoint: Option<GeodeticPoint>,
    out: Option<&str>,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let extent = extent_m(local);
    if extent > 50_000.0 {
        tracing::warn!(
            extent_m = extent,
            "track spans more than 50 km; flat-plane error grows with extent"
        );
    }

    if let Some(out_path) = out {
        track::write_local_track(out_path, points, local)?;
        tracing::info!("wrote {} local points to {}", local.len(), out_path);
    } else {
        lines.extend(local.iter().map(|p| format!("X: {:.2}, Y: {:.2}", p.x, p.y)));
    }
    lines.push(format!("Max distance from origin (m): {:.2}", extent));

    if let (Some(wp), Some(&origin)) = (waypoint, points.first()) {
        let p = projector.geodetic_to_local(origin, wp);
        lines.push(format!("Waypoint X: {:.2}, Y: {:.2}", p.x, p.y));
    }
    Ok(lines)
}

fn main() -> Result<()> {
    geolocal::init_tracing();
    let cli = Cli::parse();

    let projector = Projector::with_radius(cli.radius)?;
    let waypoint = cli
        .waypoint
        .as_deref()
        .map(track::parse_point)
        .transpose()
        .context("parsing --waypoint")?;

    let points = track::read_track(&cli.csv)?;
    if points.is_empty() {
        tracing::warn!("{} has no data rows", &cli.csv);
        return Ok(());
    }
    let origin = points[0];
    tracing::info!(
        points = points.len(),
        origin_lat = origin.lat(),
        origin_lon = origin.lon(),
        "loaded {}",
        &cli.csv
    );

    let now = SystemTime::now();
    let local = if cli.parallel {
        par_convert_all_to_local(&projector, &points)
    } else {
        convert_all_to_local(&projector, &points)
    };
    if let Ok(elapsed) = now.elapsed() {
        tracing::debug!("converted in {} s", elapsed.as_secs_f64());
    }

    for line in report(&projector, &points, &local, waypoint, cli.out.as_deref())? {
        println!("{line}");
    }

    Ok(())
}
