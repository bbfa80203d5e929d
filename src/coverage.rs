use std::cmp;

use crate::point::Sensor;

/// Inclusive range `lo..=hi` of x positions on one row. Empty when `lo > hi`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval {
    pub lo: i64,
    pub hi: i64,
}

impl Interval {
    pub fn new(lo: i64, hi: i64) -> Self {
        Interval { lo, hi }
    }

    pub fn empty() -> Self {
        Interval { lo: 1, hi: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Number of integers in the interval.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.hi.abs_diff(self.lo) + 1
        }
    }

    pub fn contains(&self, v: i64) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// Whether the two intervals overlap or sit next to each other, so that
    /// together they cover one unbroken run of integers.
    pub fn touches(&self, o: &Self) -> bool {
        if self.is_empty() || o.is_empty() {
            return false;
        }
        self.contains(o.lo) || self.contains(o.lo - 1)
            || self.contains(o.hi) || self.contains(o.hi + 1)
            || o.contains(self.lo) || o.contains(self.lo - 1)
            || o.contains(self.hi) || o.contains(self.hi + 1)
    }

    pub fn union(&self, o: &Self) -> Self {
        Interval::new(cmp::min(self.lo, o.lo), cmp::max(self.hi, o.hi))
    }
}

/// The x positions on `row` that lie within the sensor's radius.
pub fn row_coverage(sensor: &Sensor, row: i64) -> Interval {
    let offset = sensor.position.y.abs_diff(row);
    let radius = sensor.radius();
    if offset > radius {
        return Interval::empty();
    }
    let rem = (radius - offset) as i64;
    let mid = sensor.position.x;
    Interval::new(mid - rem, mid + rem)
}
