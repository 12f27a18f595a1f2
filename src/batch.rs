use rayon::prelude::*;

use crate::geo::{GeodeticPoint, LocalPoint, Projector};

/// Projects every point relative to the first one. Empty in, empty out.
///
/// `result[0]` is the origin itself and lands at (0, 0) up to rounding.
pub fn convert_all_to_local(projector: &Projector, points: &[GeodeticPoint]) -> Vec<LocalPoint> {
    match points.first() {
        Some(&origin) => convert_relative_to(projector, origin, points),
        None => Vec::new(),
    }
}

/// Same as [`convert_all_to_local`], with the per-point work spread over the rayon pool.
pub fn par_convert_all_to_local(
    projector: &Projector,
    points: &[GeodeticPoint],
) -> Vec<LocalPoint> {
    let Some(&origin) = points.first() else {
        return Vec::new();
    };
    points
        .par_iter()
        .map(|&p| projector.geodetic_to_local(origin, p))
        .collect()
}

/// Projects every point relative to an explicit origin, preserving order.
pub fn convert_relative_to(
    projector: &Projector,
    origin: GeodeticPoint,
    points: &[GeodeticPoint],
) -> Vec<LocalPoint> {
    points
        .iter()
        .map(|&p| projector.geodetic_to_local(origin, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_points() -> Vec<GeodeticPoint> {
        [
            (39.033236, -94.577538),
            (39.040763, -94.577611),
            (39.024617, -94.577756),
            (39.033840, -94.554732),
            (39.033559, -94.602259),
            (39.038549, -94.562202),
            (39.033447, -94.591252),
            (39.024701, -94.591180),
            (39.025878, -94.564259),
        ]
        .iter()
        .map(|&(lat, lon)| GeodeticPoint::new(lat, lon).unwrap())
        .collect()
    }

    #[test]
    fn empty_batch() {
        assert!(convert_all_to_local(&Projector::default(), &[]).is_empty());
        assert!(par_convert_all_to_local(&Projector::default(), &[]).is_empty());
    }

    #[test]
    fn single_point_maps_to_origin() {
        let points = [GeodeticPoint::new(10.0, 20.0).unwrap()];
        let out = convert_all_to_local(&Projector::default(), &points);
        assert_eq!(out.len(), 1);
        assert!(out[0].x.abs() < 1e-9 && out[0].y.abs() < 1e-9, "{:?}", out[0]);
    }

    #[test]
    fn reference_list() {
        let out = convert_all_to_local(&Projector::default(), &reference_points());
        assert_eq!(out.len(), 9);
        assert_eq!(format!("{:.2}, {:.2}", out[0].x, out[0].y), "0.00, 0.00");

        // second point sits ~837 m due north, fourth ~1970 m east
        assert!((out[1].y - 836.964).abs() < 0.01, "{:?}", out[1]);
        assert!(out[1].x.abs() < 10.0, "{:?}", out[1]);
        assert!((out[3].x - 1969.830).abs() < 0.01, "{:?}", out[3]);
        assert!(out[4].x < 0.0 && out[7].y < 0.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let points = reference_points();
        let projector = Projector::default();
        assert_eq!(
            convert_all_to_local(&projector, &points),
            par_convert_all_to_local(&projector, &points)
        );
    }

    #[test]
    fn explicit_origin() {
        let points = reference_points();
        let projector = Projector::default();
        let out = convert_relative_to(&projector, points[1], &points);
        assert_eq!(out.len(), points.len());
        assert_eq!(out[1], LocalPoint::default());
        assert!(out[0].y < -800.0);
    }

    proptest! {
        #[test]
        fn preserves_length_and_is_repeatable(
            raw in proptest::collection::vec((-60.0..=60.0f64, -179.0..=179.0f64), 1..40)
        ) {
            let points: Vec<_> = raw
                .iter()
                .map(|&(lat, lon)| GeodeticPoint::new(lat, lon).unwrap())
                .collect();
            let projector = Projector::default();
            let first = convert_all_to_local(&projector, &points);
            let second = convert_all_to_local(&projector, &points);
            prop_assert_eq!(first.len(), points.len());
            prop_assert!(first[0].magnitude() < 1e-6);
            prop_assert_eq!(first, second);
        }
    }
}
