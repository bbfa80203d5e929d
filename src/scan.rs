use std::collections::HashSet;

use tracing::debug;

use crate::coverage::{row_coverage, Interval};
use crate::merge::merge;
use crate::point::{Point, Sensor};

/// Counts the positions on `row` where a beacon cannot be. Positions holding a
/// known beacon are left out of the count.
pub fn count_excluded(sensors: &[Sensor], beacons: &HashSet<Point>, row: i64) -> u64 {
    let runs = merge(sensors.iter().map(|s| row_coverage(s, row)));
    let covered: u64 = runs.iter().map(Interval::len).sum();
    let beacon_spots = beacons.iter().filter(|b| b.y == row).count() as u64;
    debug!(row, runs = runs.len(), covered, beacon_spots, "scanned row");
    covered.saturating_sub(beacon_spots)
}
