//! Locating the single position in `[0,limit]x[0,limit]` that no sensor
//! covers.
//!
//! A lone uncovered position is hemmed in by coverage diamonds on every side,
//! so it either sits in a corner of the search square or lies where the
//! outside edges of two diamonds cross. Only those points are checked.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::edge::outside_edges;
use crate::error::{Error, Result};
use crate::point::{Point, Sensor};
use crate::segment::LineSegment;

fn in_bounds(p: &Point, limit: i64) -> bool {
    (0..=limit).contains(&p.x) && (0..=limit).contains(&p.y)
}

/// Corners first, then in-bounds edge intersections in the order they're
/// found. Each point appears once.
fn candidates(sensors: &[Sensor], limit: i64) -> Result<Vec<Point>> {
    let corners = [
        Point::new(0, 0),
        Point::new(0, limit),
        Point::new(limit, 0),
        Point::new(limit, limit),
    ];

    let mut edges: Vec<LineSegment> = Vec::with_capacity(sensors.len() * 4);
    for sensor in sensors {
        edges.extend(outside_edges(sensor)?);
    }

    let mut seen: HashSet<Point> = HashSet::new();
    let mut points: Vec<Point> = Vec::new();
    for p in corners {
        if seen.insert(p) {
            points.push(p);
        }
    }
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            let Some(p) = a.intersect(b) else {
                continue;
            };
            if in_bounds(&p, limit) && seen.insert(p) {
                points.push(p);
            }
        }
    }
    debug!(edges = edges.len(), candidates = points.len(), "collected gap candidates");
    Ok(points)
}

/// Finds the position in `[0,limit]x[0,limit]` outside every sensor's radius.
///
/// This assumes there's exactly one such position. If there are several, the
/// first candidate found wins: corners in the order (0,0), (0,limit),
/// (limit,0), (limit,limit), then edge intersections in sensor order.
pub fn find_gap(sensors: &[Sensor], limit: i64) -> Result<Point> {
    for p in candidates(sensors, limit)? {
        match sensors.iter().find(|s| s.covers(&p)) {
            Some(s) => trace!(point = %p, sensor = %s.position, "candidate covered"),
            None => {
                debug!(point = %p, "found uncovered point");
                return Ok(p);
            },
        }
    }
    Err(Error::NoGapFound { limit })
}

/// Encodes a point in the search square as a single number, using `limit` as
/// the multiplier for x.
pub fn tuning_frequency(p: &Point, limit: i64) -> i64 {
    p.x * limit + p.y
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::input::read_sensors;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn test_find_gap_example() {
        let sensors = read_sensors(EXAMPLE.as_bytes()).unwrap();
        let p = find_gap(&sensors, 20).unwrap();
        assert_eq!(p, Point::new(14, 11));
        assert_eq!(tuning_frequency(&p, 20), 291);
    }

    #[test]
    fn test_find_gap_corner() {
        // Radius 5 from (1,1) reaches everything in [0,4]x[0,4] except (4,4).
        let sensors = vec![Sensor::from_coords(1, 1, 1, 6)];
        assert_eq!(find_gap(&sensors, 4).unwrap(), Point::new(4, 4));
    }

    #[test]
    fn test_find_gap_all_covered() {
        let sensors = vec![Sensor::from_coords(5, 5, 5, 100)];
        let err = find_gap(&sensors, 10).unwrap_err();
        assert!(matches!(err, Error::NoGapFound { limit: 10 }), "{err:?}");
    }

    #[test]
    fn test_candidates_start_with_corners() {
        let sensors = vec![Sensor::from_coords(5, 5, 5, 7)];
        let points = candidates(&sensors, 10).unwrap();
        assert_eq!(&points[..4], &[
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(10, 0),
            Point::new(10, 10),
        ]);
        // The diamond's four outer vertices, where its own edges meet.
        let rest: HashSet<Point> = points[4..].iter().copied().collect();
        let want: HashSet<Point> = [
            Point::new(5, 2),
            Point::new(5, 8),
            Point::new(2, 5),
            Point::new(8, 5),
        ].into_iter().collect();
        assert_eq!(rest, want);
    }

    #[test]
    fn test_candidates_within_bounds() {
        let sensors = read_sensors(EXAMPLE.as_bytes()).unwrap();
        let points = candidates(&sensors, 20).unwrap();
        assert!(points.iter().all(|p| in_bounds(p, 20)));
        let unique: HashSet<&Point> = points.iter().collect();
        assert_eq!(unique.len(), points.len());
    }

    #[test]
    fn test_tuning_frequency() {
        assert_eq!(tuning_frequency(&Point::new(14, 11), 4000000), 56000011);
    }
}
