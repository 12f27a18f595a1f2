use anyhow::{Context, Result};
use clap::Parser;

use geolocal::{convert_all_to_local, track, GeodeticPoint, Projector, EARTH_MEAN_RADIUS_M};

const REFERENCE_POINTS: [(f64, f64); 9] = [
    (39.033236, -94.577538),
    (39.040763, -94.577611),
    (39.024617, -94.577756),
    (39.033840, -94.554732),
    (39.033559, -94.602259),
    (39.038549, -94.562202),
    (39.033447, -94.591252),
    (39.024701, -94.591180),
    (39.025878, -94.564259),
];

#[derive(Parser, Debug)]
#[command(name = "geolocal-list")]
#[command(about = "Project a literal list of lat,lon points into local east/north meters around the first one.", long_about = None)]
struct Cli {
    /// Points as `lat,lon;lat,lon;...`. Defaults to a built-in nine point list.
    #[arg(short, long)]
    points: Option<String>,

    /// Sphere radius in meters
    #[arg(short, long, default_value_t = EARTH_MEAN_RADIUS_M)]
    radius: f64,
}

fn parse_points(list: &str) -> Result<Vec<GeodeticPoint>> {
    list.split(';')
        .filter(|s| !s.trim().is_empty())
        .enumerate()
        .map(|(i, s)| track::parse_point(s).with_context(|| format!("point {}", i + 1)))
        .collect()
}

fn main() -> Result<()> {
    geolocal::init_tracing();
    let cli = Cli::parse();

    let projector = Projector::with_radius(cli.radius)?;
    let points = match &cli.points {
        Some(list) => parse_points(list)?,
        None => REFERENCE_POINTS
            .iter()
            .map(|&(lat, lon)| GeodeticPoint::new(lat, lon))
            .collect::<Result<Vec<_>, _>>()?,
    };
    if points.is_empty() {
        tracing::warn!("no points given");
    }

    let local = convert_all_to_local(&projector, &points);

    println!("New Cartesian Coordinates:");
    for p in &local {
        println!("X: {:.2}, Y: {:.2}", p.x, p.y);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_lists() {
        let points = parse_points("10,20; 10.5,20.5;").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].lon(), 20.5);

        let err = parse_points("10,20;oops").unwrap_err();
        assert_eq!(err.to_string(), "point 2");
    }
}
